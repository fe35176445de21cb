use serde::Serialize;

/// The first few items of a list plus a count of the ones left out,
/// rendered as `+N more` chips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview<T> {
    pub shown: Vec<T>,
    pub hidden: usize,
}

impl<T: Clone> Preview<T> {
    pub fn of(items: &[T], limit: usize) -> Self {
        let shown: Vec<T> = items.iter().take(limit).cloned().collect();
        Self {
            hidden: items.len() - shown.len(),
            shown,
        }
    }
}

impl<T> Preview<T> {
    pub fn more_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}

#[test]
fn preview_hides_overflow() {
    let facilities = ["Waiting Area", "Restrooms", "Food Court", "ATM", "Parking"];
    let preview = Preview::of(&facilities, 3);
    assert_eq!(preview.shown, vec!["Waiting Area", "Restrooms", "Food Court"]);
    assert_eq!(preview.hidden, 2);
    assert_eq!(preview.more_label().as_deref(), Some("+2 more"));
}

#[test]
fn preview_of_short_list() {
    let preview = Preview::of(&["Doraha", "Jalandhar"], 4);
    assert_eq!(preview.hidden, 0);
    assert!(preview.more_label().is_none());
}
