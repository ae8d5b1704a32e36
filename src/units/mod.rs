//! Built-in unit families.
//!
//! Each family declares its units into a [`RegistrationQueue`]; nothing here
//! touches the catalog. [`declare_builtin_units`] is the one place that decides
//! which families participate.

pub mod chart;
pub mod creative;
pub mod form;
pub mod layout;
pub mod ui;

use tracing::info;

use crate::queue::RegistrationQueue;

/// A source of unit declarations
pub trait UnitModule {
    /// Name used in logs
    fn module_name() -> &'static str;

    /// Queue every unit this module provides
    fn declare(queue: &mut RegistrationQueue);
}

/// Queue declarations from every built-in family.
pub fn declare_builtin_units(queue: &mut RegistrationQueue) {
    declare_module::<ui::UiUnits>(queue);
    declare_module::<chart::ChartUnits>(queue);
    declare_module::<form::FormUnits>(queue);
    declare_module::<layout::LayoutUnits>(queue);
    declare_module::<creative::CreativeUnits>(queue);
}

/// Run one module's declarations and log how many it contributed
pub fn declare_module<T: UnitModule>(queue: &mut RegistrationQueue) {
    let before = queue.count();
    T::declare(queue);
    info!(
        "Module '{}' declared {} units",
        T::module_name(),
        queue.count() - before
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::discovery;

    #[test]
    fn test_builtin_units_all_activate_cleanly() {
        let mut queue = RegistrationQueue::new();
        declare_builtin_units(&mut queue);
        assert!(queue.count() > 0);

        let mut catalog = Catalog::new();
        let report = queue.drain(&mut catalog);
        assert_eq!(report.failed, 0);
        assert_eq!(report.registered, catalog.len());
    }

    #[test]
    fn test_builtin_units_are_healthy() {
        let mut queue = RegistrationQueue::new();
        declare_builtin_units(&mut queue);
        let mut catalog = Catalog::new();
        queue.drain(&mut catalog);

        for entry in catalog.iter() {
            let report = discovery::validate(&catalog, &entry.name);
            assert!(report.is_healthy(), "{} has issues: {:?}", entry.id, report.issues);
        }
    }
}
