use rand::seq::SliceRandom;

/// Applies a uniform random permutation to `items` in place.
pub fn shuffle<T>(items: &mut [T]) {
    items.shuffle(&mut rand::thread_rng());
}

/// Renders `"<count> <noun>"` with the noun pluralized for any count other
/// than one. `plural_override` replaces the default `noun + "s"` form.
pub fn numbered(noun: &str, count: usize, plural_override: Option<&str>) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        match plural_override {
            Some(plural) => format!("{} {}", count, plural),
            None => format!("{} {}s", count, noun),
        }
    }
}
