use std::collections::HashMap;

use mealplanner_shared::shopping::LineItem;

/// Carries purchased flags from `previous` onto a freshly aggregated list.
///
/// Items keep their flag when the same (name, unit) was in `previous`, new
/// items start unchecked, and entries that disappeared from the plan are
/// dropped. The order of `new_list` is preserved.
pub fn reconcile(new_list: Vec<LineItem>, previous: Option<&[LineItem]>) -> Vec<LineItem> {
    let previous: HashMap<(&str, &str), bool> = previous
        .unwrap_or_default()
        .iter()
        .map(|item| (item.key(), item.purchased))
        .collect();

    new_list
        .into_iter()
        .map(|mut item| {
            let purchased = previous.get(&item.key()).copied().unwrap_or(false);
            item.purchased = purchased;
            item
        })
        .collect()
}

/// Unpurchased items first, then by (name, unit).
pub fn presentation_order(mut items: Vec<LineItem>) -> Vec<LineItem> {
    items.sort_by(|a, b| {
        a.purchased
            .cmp(&b.purchased)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.unit.cmp(&b.unit))
    });
    items
}

/// Flips the purchased flag of one item and returns its new value.
pub fn toggle(items: &mut [LineItem], name: &str, unit: &str) -> mealplanner_shared::Result<bool> {
    let Some(item) = items.iter_mut().find(|item| item.key() == (name, unit)) else {
        mealplanner_shared::user!("ingredient not found: {name} ({unit})");
    };

    item.purchased = !item.purchased;

    Ok(item.purchased)
}

pub fn reset(items: &mut [LineItem]) {
    for item in items {
        item.purchased = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purchased(name: &str, unit: &str) -> LineItem {
        LineItem {
            purchased: true,
            ..LineItem::new(name, 1.0, unit)
        }
    }

    #[test]
    fn test_reconcile_without_previous_starts_unchecked() {
        let new_list = vec![purchased("Tomato", "g")];

        let result = reconcile(new_list.clone(), None);
        assert!(!result[0].purchased);

        let result = reconcile(new_list, Some(&[]));
        assert!(!result[0].purchased);
    }

    #[test]
    fn test_reconcile_matches_on_name_and_unit() {
        let previous = vec![purchased("Flour", "g")];
        let new_list = vec![LineItem::new("Flour", 1.2, "kg"), LineItem::new("Flour", 800.0, "g")];

        let result = reconcile(new_list, Some(&previous));

        assert!(!result[0].purchased);
        assert!(result[1].purchased);
    }

    #[test]
    fn test_presentation_order_is_stable() {
        let items = vec![
            purchased("Apple", "pcs"),
            LineItem::new("Zucchini", 2.0, "pcs"),
            LineItem::new("Basil", 10.0, "g"),
        ];

        let ordered = presentation_order(items.clone());
        let names: Vec<_> = ordered.iter().map(|i| i.name.as_str()).collect();

        assert_eq!(names, ["Basil", "Zucchini", "Apple"]);
        assert_eq!(presentation_order(items), ordered);
    }

    #[test]
    fn test_toggle_and_reset() {
        let mut items = vec![LineItem::new("Basil", 10.0, "g")];

        assert!(toggle(&mut items, "Basil", "g").unwrap());
        assert!(!toggle(&mut items, "Basil", "g").unwrap());
        assert!(toggle(&mut items, "Basil", "kg").is_err());

        toggle(&mut items, "Basil", "g").unwrap();
        reset(&mut items);
        assert!(!items[0].purchased);
    }
}
