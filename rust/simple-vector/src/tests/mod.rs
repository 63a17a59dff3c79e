mod value_semantics_tests;

/// Element type that counts how many times it has been cloned.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Tracked {
    pub value: i64,
    pub clones: std::rc::Rc<std::cell::Cell<usize>>,
}

impl Tracked {
    pub fn new(value: i64, clones: &std::rc::Rc<std::cell::Cell<usize>>) -> Tracked {
        Tracked {
            value,
            clones: clones.clone(),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        Tracked {
            value: self.value,
            clones: self.clones.clone(),
        }
    }
}
