pub mod turbine;

/// Convenience cell holding the last value written to a display surface.
/// Cloning shares the underlying storage, so one handle can read back what
/// another wrote. For example a test can observe writes made through a
/// controller that owns the other handle.
#[derive(Clone, Default, Debug)]
pub struct SurfaceCell<T>(std::sync::Arc<std::sync::Mutex<Option<T>>>);

impl<T: Clone> SurfaceCell<T> {
    /// Sets `value` as the last written value.
    ///
    /// # Panics
    ///
    /// If the locking the interally used mutex fails.
    pub fn set(&self, value: T) {
        let mut data = self.0.lock().unwrap();
        let _ = data.insert(value);
    }

    /// Gets a copy of the last written value, `None` if nothing was written yet.
    ///
    /// # Panics
    ///
    /// If the locking of the mutex fails
    pub fn get(&self) -> Option<T> {
        let data = self.0.lock().unwrap();
        data.clone()
    }
}
