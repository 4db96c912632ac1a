use crate::entities::Country;

/// All countries of an imported map, in source order.
/// Never modified after import, dragging operates on copies.
#[derive(Clone, Debug, Default)]
pub struct Atlas {
    pub countries: Vec<Country>,
}

impl Atlas {
    pub fn new(countries: Vec<Country>) -> Self {
        Atlas { countries }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.name == name)
    }
}
