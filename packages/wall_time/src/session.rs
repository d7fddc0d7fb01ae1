//! Wall-clock time tracking sessions.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::pal::PlatformFacade;
use crate::{ERR_POISONED_LOCK, Operation, OperationMetrics, Report};

/// Manages wall-clock time tracking session state and contains operations.
///
/// This type serves as a container for tracking operations and provides
/// methods to analyze elapsed-time patterns across different operations.
///
/// # Examples
///
/// ```
/// use wall_time::Session;
///
/// let session = Session::new();
/// let operation = session.operation("busy_work");
///
/// for _ in 0..3 {
///     let _span = operation.measure();
///     // Perform the work being measured
///     let mut sum = 0;
///     for i in 0..1000 {
///         sum += i;
///     }
///     std::hint::black_box(sum);
/// }
///
/// // Output statistics of all operations to console.
/// // Using print_to_stdout() here is important in benchmarks because it will
/// // print nothing if no spans were recorded, not even an empty line, which can
/// // be functionally critical for benchmark harness behavior.
/// session.print_to_stdout();
/// ```
#[derive(Debug)]
pub struct Session {
    operations: Arc<Mutex<HashMap<String, Arc<Mutex<OperationMetrics>>>>>,
    platform: PlatformFacade,
}

impl Session {
    /// Creates a new wall-clock time tracking session.
    #[expect(
        clippy::new_without_default,
        reason = "to avoid ambiguity with the notion of a 'default session' that is not actually a default session"
    )]
    #[must_use]
    pub fn new() -> Self {
        Self {
            operations: Arc::new(Mutex::new(HashMap::new())),
            platform: PlatformFacade::real(),
        }
    }

    /// Creates a new wall-clock time tracking session with a specific platform.
    ///
    /// This method is primarily used for testing purposes to inject a fake
    /// clock that does not rely on real time passing.
    #[cfg(test)]
    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self {
            operations: Arc::new(Mutex::new(HashMap::new())),
            platform,
        }
    }

    /// Creates or retrieves an operation with the given name.
    ///
    /// If an operation with the given name already exists, its existing
    /// statistics are preserved and any consecutive or concurrent use of
    /// multiple such `Operation` instances will merge the data sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use wall_time::Session;
    ///
    /// let session = Session::new();
    /// let operation = session.operation("busy_work");
    ///
    /// for _ in 0..3 {
    ///     let _span = operation.measure();
    ///     // Elapsed wall-clock time of this block is tracked
    ///     std::hint::black_box(42 * 2);
    /// }
    /// ```
    pub fn operation(&self, name: impl Into<String>) -> Operation {
        let name = name.into();

        // Get or create operation data
        let operation_data = {
            let mut operations = self.operations.lock().expect(ERR_POISONED_LOCK);
            Arc::clone(
                operations
                    .entry(name)
                    .or_insert_with(|| Arc::new(Mutex::new(OperationMetrics::default()))),
            )
        };

        Operation::new(operation_data, self.platform.clone())
    }

    /// Creates a thread-safe report from this session.
    ///
    /// The report contains a snapshot of all wall-clock statistics captured by
    /// this session. Reports can be safely sent to other threads for
    /// processing and can be merged with other reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use wall_time::Session;
    ///
    /// let session = Session::new();
    /// let operation = session.operation("test_work");
    /// {
    ///     let _span = operation.measure();
    ///     // Work happens here
    /// }
    ///
    /// let report = session.to_report();
    /// // Report can be sent to another thread
    /// report.print_to_stdout();
    /// ```
    #[must_use]
    pub fn to_report(&self) -> Report {
        // Convert Arc<Mutex<OperationMetrics>> back to plain OperationMetrics for the report
        let operations_snapshot: HashMap<String, OperationMetrics> = self
            .operations
            .lock()
            .expect(ERR_POISONED_LOCK)
            .iter()
            .map(|(name, data_ref)| {
                (
                    name.clone(),
                    data_ref.lock().expect(ERR_POISONED_LOCK).clone(),
                )
            })
            .collect();

        Report::from_operation_data(&operations_snapshot)
    }

    /// Prints the wall-clock time statistics of all operations to stdout.
    ///
    /// This is a convenience method equivalent to `self.to_report().print_to_stdout()`.
    /// Prints nothing if no spans were captured. This may indicate that the session
    /// was part of a "list available benchmarks" probe run instead of some real activity,
    /// in which case printing anything might violate the output protocol the tool is speaking.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        self.to_report().print_to_stdout();
    }

    /// Whether there is any recorded activity in this session.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let operations = self.operations.lock().expect(ERR_POISONED_LOCK);
        operations.is_empty()
            || operations
                .values()
                .all(|data| data.lock().expect(ERR_POISONED_LOCK).total_iterations == 0)
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate to Report's Display implementation for consistency
        write!(f, "{}", self.to_report())
    }
}
