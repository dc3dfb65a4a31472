use std::time::Duration;

pub fn mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(mmss(Duration::from_secs(0)), "0:00");
        assert_eq!(mmss(Duration::from_secs(9)), "0:09");
        assert_eq!(mmss(Duration::from_secs(61)), "1:01");
        assert_eq!(mmss(Duration::from_secs(600)), "10:00");
    }
}
