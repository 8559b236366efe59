use crate::domain::customer::Customer;

/// Open/closed state of the customer detail dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogState {
    selected: Option<Customer>,
    visible: bool,
}

impl DialogState {
    pub fn open(&mut self, customer: Customer) {
        self.selected = Some(customer);
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.selected = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn selected(&self) -> Option<&Customer> {
        self.selected.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close() {
        let mut dialog = DialogState::default();
        dialog.open(Customer::new(1u64, "Ada", "Lovelace"));
        assert!(dialog.is_visible());
        assert_eq!(dialog.selected().map(|c| c.firstname.as_str()), Some("Ada"));

        dialog.close();
        assert!(!dialog.is_visible());
        assert!(dialog.selected().is_none());
    }
}
