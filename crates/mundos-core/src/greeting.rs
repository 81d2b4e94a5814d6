//! Time-of-day greeting shown on the dashboard.

/// Spanish greeting for a local hour (0-23)
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Buenos días",
        12..=19 => "Buenas tardes",
        _ => "Buenas noches",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_boundaries() {
        assert_eq!(greeting_for_hour(4), "Buenas noches");
        assert_eq!(greeting_for_hour(5), "Buenos días");
        assert_eq!(greeting_for_hour(11), "Buenos días");
        assert_eq!(greeting_for_hour(12), "Buenas tardes");
        assert_eq!(greeting_for_hour(19), "Buenas tardes");
        assert_eq!(greeting_for_hour(20), "Buenas noches");
        assert_eq!(greeting_for_hour(0), "Buenas noches");
    }
}
