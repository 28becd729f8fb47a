use getset::CopyGetters;
use strum_macros::{Display, EnumIter};

use angles::{FAngle, HeadingConvention};
use coordinates::Point;
use misc_utilities::GeometryError;
use poses::{Pose, Position};

use crate::Named;

#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, EnumIter)]
pub enum Species {
    #[default]
    Generic,
    Dog,
    Cat,
}

#[derive(Debug, Clone, PartialEq, CopyGetters)]
pub struct Animal {
    name: String,
    #[get_copy = "pub"]
    pose: Pose,
    #[get_copy = "pub"]
    species: Species,
}

impl Animal {
    pub fn new(name: &str, pose: Pose) -> Self {
        Self::of_species(name, pose, Species::Generic)
    }
    pub fn dog(name: &str, pose: Pose) -> Self {
        Self::of_species(name, pose, Species::Dog)
    }
    pub fn cat(name: &str, pose: Pose) -> Self {
        Self::of_species(name, pose, Species::Cat)
    }
    pub fn of_species(name: &str, pose: Pose, species: Species) -> Self {
        Animal {
            name: name.to_string(),
            pose,
            species,
        }
    }
    pub fn try_new(name: &str, x: f64, y: f64, heading_radians: f64) -> Result<Self, GeometryError> {
        Pose::try_new(x, y, heading_radians)
            .map(|pose| Self::new(name, pose))
            .inspect_err(|err| tracing::warn!(name, %err, "rejected animal"))
    }
    pub fn is_dog(&self) -> bool {
        self.species == Species::Dog
    }
    pub fn position(&self) -> Point {
        self.pose.position()
    }
    pub fn heading(&self) -> FAngle {
        self.pose.heading()
    }
    /// Distance to `other` and the bearing to it relative to this animal's own heading.
    ///
    /// Only the other animal's position matters; its heading is ignored.
    pub fn distance_and_heading_to(&self, other: &Animal) -> (f64, FAngle) {
        self.distance_and_heading_to_with(other, HeadingConvention::Raw)
    }
    pub fn distance_and_heading_to_with(
        &self,
        other: &Animal,
        convention: HeadingConvention,
    ) -> (f64, FAngle) {
        let (distance, heading) = self.pose.distance_and_heading_to(other.position());
        let heading = convention.apply(heading);
        tracing::debug!(
            from = %self.name,
            to = %other.name,
            distance,
            heading = heading.rad(),
            %convention,
            "relative bearing"
        );
        (distance, heading)
    }
}

impl Named for Animal {
    fn name(&self) -> &str {
        &self.name
    }
}

pub struct Dog;

impl Dog {
    pub fn new(name: &str, pose: Pose) -> Animal {
        Animal::dog(name, pose)
    }
}

pub struct Cat;

impl Cat {
    pub fn new(name: &str, pose: Pose) -> Animal {
        Animal::cat(name, pose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ntest::{assert_about_eq, assert_false, assert_true};
    use pretty_assertions::assert_eq;
    use std::f64::consts::FRAC_PI_2;
    use strum::IntoEnumIterator;

    #[test]
    fn test_3_4_5_ignores_other_heading() {
        misc_utilities::init_test_logging();
        let a = Animal::new("A", Pose::new(0.0, 0.0, 0.0));
        [0.0, 1.0, -3.0, 42.0].into_iter().for_each(|h| {
            let b = Animal::new("B", Pose::new(3.0, 4.0, h));
            let (distance, heading) = a.distance_and_heading_to(&b);
            assert_eq!(distance, 5.0);
            assert_relative_eq!(heading.rad(), 4.0_f64.atan2(3.0));
        });
    }

    #[test]
    fn test_own_heading_is_subtracted() {
        let a = Animal::new("A", Pose::new(0.0, 0.0, FRAC_PI_2));
        let b = Animal::new("B", Pose::new(0.0, 1.0, 0.0));
        let (distance, heading) = a.distance_and_heading_to(&b);
        assert_eq!(distance, 1.0);
        assert_about_eq!(heading.rad(), 0.0);
    }

    #[test]
    fn test_every_species_measures_the_same() {
        let observer_pose = Pose::new(1.0, -2.0, 0.3);
        let target = Animal::new("target", Pose::new(-4.0, 5.0, 1.0));
        let expected = Animal::new("rex", observer_pose).distance_and_heading_to(&target);
        Species::iter().for_each(|species| {
            let observer = Animal::of_species("rex", observer_pose, species);
            assert_eq!(observer.distance_and_heading_to(&target), expected);
        });
    }

    #[test]
    fn test_constructors_tag_species() {
        let pose = Pose::default();
        assert_eq!(Dog::new("rex", pose).species(), Species::Dog);
        assert_eq!(Cat::new("tom", pose).species(), Species::Cat);
        assert_eq!(Animal::new("it", pose).species(), Species::Generic);
        assert_eq!(Species::default(), Species::Generic);
        assert_true!(Dog::new("rex", pose).is_dog());
        assert_false!(Cat::new("tom", pose).is_dog());
    }

    #[test]
    fn test_named() {
        let dog = Dog::new("rex", Pose::default());
        assert_eq!(dog.name(), "rex");
        let boxed = misc_utilities::Container::new(dog);
        assert_eq!(boxed.name(), "rex");
        assert_eq!(boxed.into_inner().name(), "rex");
    }

    #[test]
    fn test_try_new() {
        misc_utilities::init_test_logging();
        let ok = Animal::try_new("A", 1.0, 2.0, 0.5).unwrap();
        assert_eq!(ok, Animal::new("A", Pose::new(1.0, 2.0, 0.5)));
        assert!(matches!(
            Animal::try_new("B", f64::NAN, 0.0, 0.0),
            Err(GeometryError::NonFiniteCoordinate { .. })
        ));
    }
}
