//! Engine context configuration.

/// Configuration applied when an engine context is created.
///
/// Every field left at `None` keeps the engine's own default. Extra engine
/// parameters can be passed verbatim with [`ContextConfig::with_param`].
#[derive(Debug, Clone, Default)]
pub struct ContextConfig {
    /// Enable model generation. `None` uses engine default.
    pub model: Option<bool>,
    /// Enable proof generation. `None` uses engine default.
    pub proof: Option<bool>,
    /// Enable unsat core extraction. `None` uses engine default.
    pub unsat_core: Option<bool>,
    /// Additional raw `(key, value)` engine parameters, applied in order.
    pub params: Vec<(String, String)>,
}

impl ContextConfig {
    /// Create a new configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable model generation.
    pub fn with_model(mut self, enabled: bool) -> Self {
        self.model = Some(enabled);
        self
    }

    /// Enable or disable proof generation.
    pub fn with_proof(mut self, enabled: bool) -> Self {
        self.proof = Some(enabled);
        self
    }

    /// Enable or disable unsat core extraction.
    pub fn with_unsat_core(mut self, enabled: bool) -> Self {
        self.unsat_core = Some(enabled);
        self
    }

    /// Pass an engine parameter through unchanged.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Check if this configuration is completely empty (all defaults).
    pub fn is_empty(&self) -> bool {
        self.model.is_none()
            && self.proof.is_none()
            && self.unsat_core.is_none()
            && self.params.is_empty()
    }

    /// Flatten the configuration into engine `(key, value)` pairs.
    ///
    /// Typed fields come first, raw parameters follow in insertion order, so
    /// a raw parameter can override a typed one.
    pub fn entries(&self) -> Vec<(String, String)> {
        let typed = [
            ("model", self.model),
            ("proof", self.proof),
            ("unsat_core", self.unsat_core),
        ];
        typed
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key.to_string(), v.to_string())))
            .chain(self.params.iter().cloned())
            .collect()
    }
}
