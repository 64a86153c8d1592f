// Utility functions
use crate::state::Effect;

/// Shows a blocking browser alert. Off-browser the message is only logged.
pub fn blocking_alert(message: &str) {
    tracing::info!(%message, "alert");

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Carries out effects in order: alerts block before any navigation happens.
pub fn run_effects(effects: Vec<Effect>, navigate: impl Fn(&str), reload: impl Fn()) {
    for effect in effects {
        match effect {
            Effect::Alert(message) => blocking_alert(&message),
            Effect::Navigate(path) => navigate(&path),
            Effect::Reload => reload(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_run_effects_in_order() {
        let log = RefCell::new(Vec::new());

        run_effects(
            vec![
                Effect::Alert("User deleted successfully.".to_string()),
                Effect::Reload,
                Effect::Navigate("/users?page=1".to_string()),
            ],
            |path| log.borrow_mut().push(format!("navigate {}", path)),
            || log.borrow_mut().push("reload".to_string()),
        );

        assert_eq!(log.into_inner(), vec!["reload", "navigate /users?page=1"]);
    }
}
