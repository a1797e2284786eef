/// Where in the document a value was reached.
///
/// `parent` is the enclosing top-level collection and `key` the mapping key
/// the value sits under. Both are borrowed from the input document and only
/// live for one descent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisContext<'a> {
    pub parent: Option<&'a str>,
    pub key: Option<&'a str>,
}

impl<'a> SynthesisContext<'a> {
    /// Context for a bare document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Context for the value stored under `key` below this one.
    ///
    /// The collection name sticks once set; a key reached at the root
    /// becomes the collection for everything beneath it.
    pub fn child(&self, key: &'a str) -> Self {
        Self {
            parent: self.parent.or(Some(key)),
            key: Some(key),
        }
    }

    pub fn is_within(&self, collection: &str) -> bool {
        self.parent == Some(collection)
    }
}
