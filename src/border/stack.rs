use crate::{
    border::spec::{BorderId, BorderSpec},
    foundation::error::{WavyframeError, WavyframeResult},
};

/// Ordered border layers. Index 0 is drawn first (bottom-most).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BorderStack {
    borders: Vec<BorderSpec>,
}

impl BorderStack {
    /// Empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of specs, validating each one and rejecting duplicate ids.
    ///
    /// Unlike [`BorderStack::push`], a colliding id is an error here.
    pub fn from_specs(specs: impl IntoIterator<Item = BorderSpec>) -> WavyframeResult<Self> {
        let mut out = Self::new();
        for spec in specs {
            spec.validate()?;
            if out.position(spec.id).is_some() {
                return Err(WavyframeError::DuplicateBorder(spec.id));
            }
            out.borders.push(spec);
        }
        Ok(out)
    }

    /// Append a border with the default configuration and return its new id.
    pub fn add(&mut self) -> BorderId {
        let spec = BorderSpec::default();
        let id = spec.id;
        self.borders.push(spec);
        id
    }

    /// Append a caller-built spec. Its id is kept, or replaced when it collides.
    pub fn push(&mut self, spec: BorderSpec) -> WavyframeResult<BorderId> {
        spec.validate()?;
        let spec = if self.position(spec.id).is_some() {
            spec.with_id(BorderId::new())
        } else {
            spec
        };
        self.borders.push(spec);
        Ok(spec.id)
    }

    /// Delete the border with this id. Returns `false` when no border matched.
    pub fn remove(&mut self, id: BorderId) -> bool {
        match self.position(id) {
            Some(i) => {
                self.borders.remove(i);
                true
            }
            None => false,
        }
    }

    /// Replace the parameters of `id` in place, keeping its position and its id.
    pub fn update(&mut self, id: BorderId, spec: BorderSpec) -> WavyframeResult<()> {
        spec.validate()?;
        let i = self
            .position(id)
            .ok_or(WavyframeError::UnknownBorder(id))?;
        self.borders[i] = spec.with_id(id);
        Ok(())
    }

    /// Move `id` to `index`, clamped to the last position.
    pub fn move_to(&mut self, id: BorderId, index: usize) -> WavyframeResult<()> {
        let from = self
            .position(id)
            .ok_or(WavyframeError::UnknownBorder(id))?;
        let spec = self.borders.remove(from);
        let to = index.min(self.borders.len());
        self.borders.insert(to, spec);
        Ok(())
    }

    /// Look up a border by id.
    pub fn get(&self, id: BorderId) -> Option<&BorderSpec> {
        self.borders.iter().find(|b| b.id == id)
    }

    /// Current index of `id`.
    pub fn position(&self, id: BorderId) -> Option<usize> {
        self.borders.iter().position(|b| b.id == id)
    }

    /// Borders in draw order.
    pub fn iter(&self) -> std::slice::Iter<'_, BorderSpec> {
        self.borders.iter()
    }

    /// Borders in draw order, as a slice.
    pub fn as_slice(&self) -> &[BorderSpec] {
        &self.borders
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.borders.len()
    }

    /// `true` when there are no layers.
    pub fn is_empty(&self) -> bool {
        self.borders.is_empty()
    }
}

impl<'a> IntoIterator for &'a BorderStack {
    type Item = &'a BorderSpec;
    type IntoIter = std::slice::Iter<'a, BorderSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
