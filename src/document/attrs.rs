/// AttrMap - an order preserving map for storing element attributes.
///
/// Attribute counts per element are small, so a linear scan of a `Vec`
/// is used rather than any hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrMap {
    attrs: Vec<(String, String)>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self { attrs: Vec::new() }
    }

    /// Insert-or-update the given key/value into the AttrMap.
    /// If the key is already present, update in place; otherwise append.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.attrs.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.attrs.push((key, value));
        }
    }

    /// As `insert`, but a new key is placed before all existing attributes.
    pub fn insert_first(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.attrs.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.attrs.insert(0, (key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.attrs.iter().position(|(k, _)| k == key)?;
        Some(self.attrs.remove(idx).1)
    }

    /// Keep only the attributes for which `f` returns true.
    pub fn retain(&mut self, mut f: impl FnMut(&str, &str) -> bool) {
        self.attrs.retain(|(k, v)| f(k, v));
    }

    /// Rename attribute keys in place, preserving order.
    pub fn rename_keys(&mut self, mut f: impl FnMut(&str) -> Option<String>) {
        for (k, _) in self.attrs.iter_mut() {
            if let Some(new_key) = f(k) {
                *k = new_key;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl FromIterator<(String, String)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut am = Self::new();
        for (k, v) in iter {
            am.insert(k, v);
        }
        am
    }
}
