/// A configuration option, with bounds on acceptable values.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if the value is within bounds.
    /// Returns whether the value was set.
    pub fn set_bounded(&mut self, value: T) -> bool {
        let (min, max) = self.min_max();
        if min <= value && value <= max {
            self.value = value;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        let mut option = ConfigOption {
            name: "test",
            min: 1,
            max: 10,
            value: 5,
        };

        assert!(option.set_bounded(10));
        assert_eq!(option.value, 10);

        assert!(!option.set_bounded(0));
        assert!(!option.set_bounded(11));
        assert_eq!(option.value, 10);
    }
}
