use crate::models::Task;

/// Maps the 1-based positions of a rendered task list to task ids.
///
/// Only valid for the listing it was built from; rebuild it from a fresh
/// listing before asking the user for a position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayMap {
    ids: Vec<i64>,
}

impl DisplayMap {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            ids: tasks.iter().map(|t| t.id).collect(),
        }
    }

    /// Resolve a display position to a task id
    pub fn resolve(&self, position: i64) -> Option<i64> {
        let index = usize::try_from(position).ok()?.checked_sub(1)?;
        self.ids.get(index).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, name: &str, completed: bool) -> Task {
        Task { id, name: name.to_string(), completed }
    }

    #[test]
    fn test_positions_follow_listing_order() {
        let tasks = vec![task(7, "Pay rent", true), task(3, "Buy milk", false)];
        let map = DisplayMap::from_tasks(&tasks);

        assert_eq!(map.len(), 2);
        for (i, t) in tasks.iter().enumerate() {
            assert_eq!(map.resolve(i as i64 + 1), Some(t.id));
        }
    }

    #[test]
    fn test_out_of_range_positions() {
        let map = DisplayMap::from_tasks(&[task(1, "A", false)]);
        assert_eq!(map.resolve(0), None);
        assert_eq!(map.resolve(-1), None);
        assert_eq!(map.resolve(2), None);
        assert_eq!(map.resolve(i64::MAX), None);
    }

    #[test]
    fn test_empty_map() {
        let map = DisplayMap::default();
        assert!(map.is_empty());
        assert_eq!(map.resolve(1), None);
    }
}
