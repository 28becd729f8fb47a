#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Container<T> {
    value: T,
}

impl<T> Container<T> {
    pub fn new(value: T) -> Self {
        Container { value }
    }
    pub fn get(&self) -> &T {
        &self.value
    }
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<T> for Container<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
