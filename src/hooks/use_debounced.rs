use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Returns `value` once it has stopped changing for `delay_ms`.
///
/// The first value is returned immediately so mounting does not wait.
#[hook]
pub fn use_debounced<T>(value: T, delay_ms: u32) -> T
where
    T: PartialEq + Clone + 'static,
{
    let settled = use_state(|| value.clone());

    {
        let settled = settled.clone();
        use_effect_with(value, move |value| {
            let timeout = pending_update(&*settled, value)
                .map(|value| Timeout::new(delay_ms, move || settled.set(value)));

            move || drop(timeout) // Cancel pending update
        });
    }

    (*settled).clone()
}

/// The value to commit once the quiet period ends, if it differs from the settled one.
///
/// A value that changes and then returns to the settled one schedules nothing.
fn pending_update<T: PartialEq + Clone>(settled: &T, latest: &T) -> Option<T> {
    (settled != latest).then(|| latest.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_changed_value_is_scheduled() {
        let settled = keywords(&["rust"]);
        let latest = keywords(&["rust", "golang"]);
        assert_eq!(pending_update(&settled, &latest), Some(latest));
    }

    #[test]
    fn test_value_back_to_settled_schedules_nothing() {
        let settled = keywords(&["rust"]);

        // "golang" added then removed again before the delay ran out
        assert!(pending_update(&settled, &keywords(&["rust", "golang"])).is_some());
        assert_eq!(pending_update(&settled, &keywords(&["rust"])), None);
    }

    #[test]
    fn test_rapid_changes_commit_only_the_last() {
        let settled = keywords(&[]);
        let burst = [
            keywords(&["rust"]),
            keywords(&["rust", "golang"]),
            keywords(&["rust", "golang", "python"]),
        ];

        // Each change replaces the previous timeout, so only the last one survives
        let mut pending = None;
        for latest in &burst {
            pending = pending_update(&settled, latest);
        }
        assert_eq!(pending, Some(keywords(&["rust", "golang", "python"])));
    }
}
