/// Fetch-cycle state for one server-backed list.
///
/// A fetch cycle is `begin` → spawn the request → `resolve` with its
/// outcome. Initiating a fetch clears any previous error and sets loading;
/// resolution clears loading and sets either data or error, never both.
///
/// Each `begin` bumps a generation counter and the caller tags the eventual
/// resolution with it. A resolution carrying a stale generation is
/// discarded, so when two fetches into the same collection overlap, only
/// the most recently issued one can apply. This closes the last-writer race
/// the original storefront documented but never fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCollection<T> {
    data: Vec<T>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl<T> Default for RemoteCollection<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            loading: false,
            error: None,
            generation: 0,
        }
    }
}

impl<T> RemoteCollection<T> {
    /// Starts a fetch cycle and returns the generation to tag its
    /// resolution with.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Applies a fetch outcome. Returns false (and changes nothing) when
    /// the generation is stale, i.e. a newer fetch has superseded this one.
    pub fn resolve(&mut self, generation: u64, result: Result<Vec<T>, String>) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, latest = self.generation, "discarding stale fetch result");
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True once a fetch has ever been initiated; used by the shell to
    /// fetch-on-first-entry without refetching on every render.
    pub fn has_started(&self) -> bool {
        self.generation > 0
    }
}

/// Same fetch-cycle contract for a single record instead of a list.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRecord<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl<T> Default for RemoteRecord<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            generation: 0,
        }
    }
}

impl<T> RemoteRecord<T> {
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    pub fn resolve(&mut self, generation: u64, result: Result<T, String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Drops the record and resets the cycle, e.g. on sign-out.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_started(&self) -> bool {
        self.generation > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_sets_loading_and_clears_error() {
        let mut collection = RemoteCollection::<u32>::default();
        collection.begin();
        let generation = collection.begin();
        collection.resolve(generation, Err("boom".to_string()));
        assert_eq!(collection.error(), Some("boom"));

        collection.begin();
        assert!(collection.is_loading());
        assert_eq!(collection.error(), None);
    }

    #[test]
    fn success_replaces_data_wholesale() {
        let mut collection = RemoteCollection::<u32>::default();
        let generation = collection.begin();
        assert!(collection.resolve(generation, Ok(vec![1, 2, 3])));
        assert_eq!(collection.data(), &[1, 2, 3]);

        let generation = collection.begin();
        collection.resolve(generation, Ok(vec![9]));
        assert_eq!(collection.data(), &[9]);
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut collection = RemoteCollection::<u32>::default();
        let first = collection.begin();
        let second = collection.begin();

        // Second fetch resolves first; the slow first response must not win.
        assert!(collection.resolve(second, Ok(vec![2])));
        assert!(!collection.resolve(first, Ok(vec![1])));
        assert_eq!(collection.data(), &[2]);
        assert!(!collection.is_loading());
    }

    #[test]
    fn loading_and_error_are_mutually_exclusive() {
        let mut collection = RemoteCollection::<u32>::default();
        assert!(!collection.is_loading() && collection.error().is_none());

        let generation = collection.begin();
        assert!(collection.is_loading() && collection.error().is_none());

        collection.resolve(generation, Err("offline".to_string()));
        assert!(!collection.is_loading() && collection.error().is_some());

        collection.begin();
        assert!(collection.is_loading() && collection.error().is_none());
    }

    #[test]
    fn record_clear_resets_cycle() {
        let mut record = RemoteRecord::<u32>::default();
        let generation = record.begin();
        record.resolve(generation, Ok(7));
        assert_eq!(record.data(), Some(&7));

        record.clear();
        assert_eq!(record.data(), None);
        assert!(!record.has_started());
    }
}
