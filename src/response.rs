use serde::Serialize;

/// Values read from or written to the device
/// during a single invocation.
#[derive(Debug, Default, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<i32>,
}

impl Response {
    /// Renders the response as human-readable lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![];

        if let Some(current) = self.current {
            lines.push(match self.percentage {
                Some(percentage) => format!("Current Brightness: {current} ({percentage}%)"),
                None => format!("Current Brightness: {current}"),
            });
        }

        if let Some(max) = self.max {
            lines.push(format!("Maximum Brightness: {max}"));
        }

        if let Some(brightness) = self.brightness {
            lines.push(format!("Brightness Level: {brightness}"));
        }

        lines
    }
}

/// Gets `value` as a percentage of `max`, rounded to the nearest whole number.
pub fn percentage(value: i32, max: i32) -> Option<i32> {
    if max <= 0 {
        return None;
    }

    let percentage = (f64::from(value) / f64::from(max) * 100.0).round();
    Some(percentage as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let response = Response::default();
        assert!(response.lines().is_empty());
        assert_eq!(serde_json::to_string(&response).unwrap(), "{}");
    }

    #[test]
    fn current_with_percentage() {
        let response = Response {
            current: Some(2),
            percentage: percentage(2, 3),
            ..Response::default()
        };

        assert_eq!(response.lines(), vec!["Current Brightness: 2 (67%)"]);
    }

    #[test]
    fn all_fields() {
        let response = Response {
            current: Some(1),
            percentage: Some(50),
            max: Some(2),
            brightness: Some(2),
        };

        assert_eq!(
            response.lines(),
            vec![
                "Current Brightness: 1 (50%)",
                "Maximum Brightness: 2",
                "Brightness Level: 2",
            ]
        );
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"current":1,"percentage":50,"max":2,"brightness":2}"#
        );
    }

    #[test]
    fn json_skips_missing() {
        let response = Response {
            brightness: Some(128),
            ..Response::default()
        };

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"brightness":128}"#
        );
    }

    #[test]
    fn percentage_of_max() {
        assert_eq!(percentage(0, 3), Some(0));
        assert_eq!(percentage(1, 3), Some(33));
        assert_eq!(percentage(3, 3), Some(100));
        assert_eq!(percentage(1, 8), Some(13));
        assert_eq!(percentage(1, 0), None);
    }
}
