use crate::domain::task::Task;

/// Stable sort of a column's tasks by priority rank
///
/// High priority tasks come first, then medium, then low. Tasks of equal
/// priority keep their existing relative order, which is the only place a
/// manual reorder survives.
///
/// # Examples
/// ```
/// use taskboard_core::domain::sorting::sort_by_priority;
/// use taskboard_core::domain::task::{Priority, Task};
///
/// let mut tasks = vec![
///     Task::new("Clean", "", Priority::Low),
///     Task::new("Buy milk", "", Priority::High),
/// ];
///
/// sort_by_priority(&mut tasks);
/// assert_eq!(tasks[0].title, "Buy milk");
/// ```
pub fn sort_by_priority(tasks: &mut [Task]) {
    // slice::sort_by_key is stable
    tasks.sort_by_key(|task| task.priority.rank());
}

/// Checks that ranks never decrease along the slice
pub fn is_priority_sorted(tasks: &[Task]) -> bool {
    tasks
        .windows(2)
        .all(|pair| pair[0].priority.rank() <= pair[1].priority.rank())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::Priority;

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_sort_by_priority() {
        let mut tasks = vec![
            Task::new("low", "", Priority::Low),
            Task::new("high", "", Priority::High),
            Task::new("medium", "", Priority::Medium),
        ];

        sort_by_priority(&mut tasks);

        assert_eq!(titles(&tasks), vec!["high", "medium", "low"]);
        assert!(is_priority_sorted(&tasks));
    }

    #[test]
    fn test_sort_is_stable_for_equal_priority() {
        let mut tasks = vec![
            Task::new("m1", "", Priority::Medium),
            Task::new("h1", "", Priority::High),
            Task::new("m2", "", Priority::Medium),
            Task::new("h2", "", Priority::High),
            Task::new("m3", "", Priority::Medium),
        ];

        sort_by_priority(&mut tasks);

        assert_eq!(titles(&tasks), vec!["h1", "h2", "m1", "m2", "m3"]);
    }

    #[test]
    fn test_is_priority_sorted() {
        let sorted = vec![
            Task::new("a", "", Priority::High),
            Task::new("b", "", Priority::High),
            Task::new("c", "", Priority::Low),
        ];
        let unsorted = vec![
            Task::new("a", "", Priority::Low),
            Task::new("b", "", Priority::High),
        ];

        assert!(is_priority_sorted(&sorted));
        assert!(!is_priority_sorted(&unsorted));
        assert!(is_priority_sorted(&[]));
    }
}
