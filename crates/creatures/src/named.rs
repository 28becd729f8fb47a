use misc_utilities::Container;

pub trait Named {
    fn name(&self) -> &str;
}

impl<T: Named> Named for Container<T> {
    fn name(&self) -> &str {
        self.get().name()
    }
}
