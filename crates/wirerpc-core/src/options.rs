//! Client construction options.

use crate::envelope::Params;
use crate::throttle::RequestThrottle;

/// Policy for encoding a call that has no parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyParams {
    /// Omit the `params` field entirely.
    #[default]
    Omit,
    /// Encode absent params as `[]`, for servers that require the field.
    EmptyArray,
}

impl EmptyParams {
    /// Apply the policy to normalized parameters.
    pub fn apply(self, params: Option<Params>) -> Option<Params> {
        match (self, params) {
            (Self::EmptyArray, None) => Some(Params::Positional(Vec::new())),
            (_, params) => params,
        }
    }
}

/// Options shared by every call surface.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Enables the request throttle: calls are admitted to the transport
    /// no faster than this many per second, in submission order. Absent
    /// means no throttling and no added latency.
    pub requests_per_second: Option<u32>,
    /// How calls without parameters are framed.
    pub empty_params: EmptyParams,
}

impl ClientOptions {
    /// Options with a request-rate cap and defaults otherwise.
    pub fn rate_limited(requests_per_second: u32) -> Self {
        Self {
            requests_per_second: Some(requests_per_second),
            ..Self::default()
        }
    }

    /// Build the throttle these options call for, if any.
    pub fn build_throttle(&self) -> Option<RequestThrottle> {
        self.requests_per_second
            .filter(|rate| *rate > 0)
            .map(RequestThrottle::per_second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_omits_params_and_throttle() {
        let options = ClientOptions::default();
        assert!(options.build_throttle().is_none());
        assert_eq!(options.empty_params.apply(None), None);
    }

    #[test]
    fn empty_array_policy_fills_in() {
        assert_eq!(
            EmptyParams::EmptyArray.apply(None),
            Some(Params::Positional(Vec::new()))
        );
        let given = Some(Params::Positional(vec![serde_json::json!(1)]));
        assert_eq!(EmptyParams::EmptyArray.apply(given.clone()), given);
    }

    #[test]
    fn rate_limited_builds_a_throttle() {
        let options = ClientOptions::rate_limited(4);
        let throttle = options.build_throttle().unwrap();
        assert_eq!(throttle.interval(), std::time::Duration::from_millis(250));
    }
}
