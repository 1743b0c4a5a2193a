// Static page data (single source of truth for the modal)

/// Portfolio categories offered by the create-portfolio select, in render order.
pub const CATEGORIES: [&str; 5] = [
    "Residential",
    "Commercial",
    "Urban Planning",
    "Interior Design",
    "Landscape Architecture",
];

/// A predefined portfolio layout shown in the modal gallery.
pub struct Template {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub const TEMPLATES: [Template; 3] = [
    Template {
        name: "Minimalist Showcase",
        image: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c",
        description: "Clean and modern layout for elegant presentations.",
    },
    Template {
        name: "Urban Aesthetic",
        image: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab",
        description: "Perfect for large-scale projects with bold visuals.",
    },
    Template {
        name: "Classic Blueprint",
        image: "https://images.unsplash.com/photo-1574359411659-11a4a7b6b0ad",
        description: "Blueprint-style design for a technical touch.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn categories_are_the_five_labels_in_order() {
        assert_eq!(CATEGORIES, [
            "Residential",
            "Commercial",
            "Urban Planning",
            "Interior Design",
            "Landscape Architecture",
        ]);
    }

    #[test]
    fn gallery_has_exactly_three_templates() {
        let names: Vec<_> = TEMPLATES.iter().map(|t| t.name).collect();
        assert_eq!(names, vec![
            "Minimalist Showcase",
            "Urban Aesthetic",
            "Classic Blueprint",
        ]);
    }

    #[test]
    fn each_template_carries_its_copy() {
        let descriptions: Vec<_> = TEMPLATES.iter().map(|t| t.description).collect();
        assert_eq!(descriptions, vec![
            "Clean and modern layout for elegant presentations.",
            "Perfect for large-scale projects with bold visuals.",
            "Blueprint-style design for a technical touch.",
        ]);
        for template in &TEMPLATES {
            assert!(template.image.starts_with("https://images.unsplash.com/"));
        }
    }
}
