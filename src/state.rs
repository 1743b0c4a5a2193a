// Page-local UI state: overlay visibility and the create-portfolio form.

/// Visibility flags for the two header-triggered overlays.
///
/// The flags are independent — nothing closes one when the other opens, so
/// the dropdown can sit open behind the modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overlays {
    pub portfolio_modal: bool,
    pub quick_links: bool,
}

impl Overlays {
    /// Header trigger: the only transition that can open the modal.
    pub fn toggle_portfolio_modal(&mut self) {
        self.portfolio_modal = !self.portfolio_modal;
    }

    /// The modal's X control and Cancel button both land here.
    pub fn close_portfolio_modal(&mut self) {
        self.portfolio_modal = false;
    }

    pub fn toggle_quick_links(&mut self) {
        self.quick_links = !self.quick_links;
    }
}

/// Values of the create-portfolio form. All fields start empty and survive
/// modal close/reopen; nothing submits or resets them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PortfolioForm {
    pub name: String,
    pub category: String,
    pub description: String,
}

impl PortfolioForm {
    /// Keyed field update shared by every form control. Keys match the
    /// controls' `name` attributes; anything else is ignored. No validation
    /// happens here — the category field takes whatever string it is given.
    pub fn set_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "category" => self.category = value,
            "description" => self.description = value,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn overlays_start_closed() {
        let overlays = Overlays::default();
        assert!(!overlays.portfolio_modal);
        assert!(!overlays.quick_links);
    }

    #[test]
    fn portfolio_modal_toggles_both_ways() {
        let mut overlays = Overlays::default();
        overlays.toggle_portfolio_modal();
        assert!(overlays.portfolio_modal);
        overlays.toggle_portfolio_modal();
        assert!(!overlays.portfolio_modal);
    }

    #[test]
    fn quick_links_toggle_leaves_modal_alone() {
        let mut overlays = Overlays::default();
        overlays.toggle_portfolio_modal();
        overlays.toggle_quick_links();
        assert!(overlays.portfolio_modal);
        assert!(overlays.quick_links);
        overlays.toggle_quick_links();
        assert!(overlays.portfolio_modal);
        assert!(!overlays.quick_links);
    }

    #[test]
    fn close_only_clears_the_modal_flag() {
        let mut overlays = Overlays {
            portfolio_modal: true,
            quick_links: true,
        };
        overlays.close_portfolio_modal();
        assert!(!overlays.portfolio_modal);
        assert!(overlays.quick_links);

        // Closing an already-closed modal stays closed.
        overlays.close_portfolio_modal();
        assert!(!overlays.portfolio_modal);
    }

    #[test]
    fn form_starts_empty() {
        assert_eq!(PortfolioForm::default(), PortfolioForm {
            name: String::new(),
            category: String::new(),
            description: String::new(),
        });
    }

    #[test]
    fn set_field_updates_only_its_key() {
        let mut form = PortfolioForm::default();
        form.set_field("name", "Lakeview House".into());
        assert_eq!(form.name, "Lakeview House");
        assert_eq!(form.category, "");
        assert_eq!(form.description, "");

        form.set_field("category", "Commercial".into());
        assert_eq!(form.name, "Lakeview House");
        assert_eq!(form.category, "Commercial");
        assert_eq!(form.description, "");
    }

    #[test]
    fn category_takes_any_string() {
        let mut form = PortfolioForm::default();
        form.set_field("category", "Not A Real Category".into());
        assert_eq!(form.category, "Not A Real Category");
    }

    #[test]
    fn unknown_field_is_ignored() {
        let mut form = PortfolioForm::default();
        form.set_field("name", "Lakeview House".into());
        form.set_field("images", "boathouse.jpg".into());
        assert_eq!(form, PortfolioForm {
            name: "Lakeview House".into(),
            category: String::new(),
            description: String::new(),
        });
    }
}
