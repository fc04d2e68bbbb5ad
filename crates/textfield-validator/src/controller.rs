//! Validation controller: applies a rule to a bound text field
//!
//! The host owns three bindings: the field text, the validity flag and an
//! optional trigger. The controller reads the text, writes the validity flag
//! and, in on-demand mode, resets the trigger once it has been honoured.
//!
//! ```text
//!   host edits text ──> on_text_changed() ──┐  (OnChange only)
//!                                           ├──> evaluate(text, rule) ──> is_valid
//!   host sets trigger ─> on_trigger_changed()┘  (OnDemand, trigger == true)
//!                                                    │
//!                                                    └─ defer: trigger = false
//! ```

use crate::binding::{Binding, Subscription};
use crate::config::ValidatorConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::rules::{evaluate, ValidationMode, ValidationRule};
use crate::scheduler::{DeferredQueue, Scheduler};
use crate::traits::FieldValidation;
use std::cell::Cell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// Applies one [`ValidationRule`] to a text binding under one [`ValidationMode`]
pub struct ValidationController<S = DeferredQueue> {
    text: Binding<String>,
    is_valid: Binding<bool>,
    trigger: Binding<bool>,
    rule: ValidationRule,
    mode: ValidationMode,
    scheduler: S,
    has_been_triggered: Cell<bool>,
    reset_pending: Rc<Cell<bool>>,
}

impl ValidationController {
    /// Attach a controller using a host-drained [`DeferredQueue`].
    ///
    /// `trigger` is only consulted in [`ValidationMode::OnDemand`]; when it is
    /// `None` a constant `false` binding is used. Drain the queue through
    /// [`ValidationController::scheduler`] at the end of each update pass.
    pub fn attach(
        text: Binding<String>,
        is_valid: Binding<bool>,
        rule: ValidationRule,
        mode: ValidationMode,
        trigger: Option<Binding<bool>>,
    ) -> Self {
        Self::with_scheduler(text, is_valid, rule, mode, trigger, DeferredQueue::new())
    }

    /// Attach a controller described by `config`.
    ///
    /// Fails with [`ConfigError::MissingTrigger`] when the configuration asks
    /// for on-demand validation but no trigger is supplied.
    pub fn from_config(
        text: Binding<String>,
        is_valid: Binding<bool>,
        trigger: Option<Binding<bool>>,
        config: &ValidatorConfig,
    ) -> ConfigResult<Self> {
        if config.mode == ValidationMode::OnDemand && trigger.is_none() {
            return Err(ConfigError::MissingTrigger);
        }
        Ok(Self::attach(text, is_valid, config.rule, config.mode, trigger))
    }
}

impl<S: Scheduler> ValidationController<S> {
    /// Attach a controller that defers trigger resets to `scheduler`
    pub fn with_scheduler(
        text: Binding<String>,
        is_valid: Binding<bool>,
        rule: ValidationRule,
        mode: ValidationMode,
        trigger: Option<Binding<bool>>,
        scheduler: S,
    ) -> Self {
        if mode == ValidationMode::OnDemand && trigger.is_none() {
            warn!(%rule, "on-demand validation attached without a trigger; it will never run");
        }
        debug!(%rule, %mode, "validation attached");

        Self {
            text,
            is_valid,
            trigger: trigger.unwrap_or_else(|| Binding::constant(false)),
            rule,
            mode,
            scheduler,
            has_been_triggered: Cell::new(false),
            reset_pending: Rc::new(Cell::new(false)),
        }
    }

    /// Hook for the host to call after every change to the text binding
    pub fn on_text_changed(&self) {
        match self.mode {
            ValidationMode::OnChange => {
                self.validate_now();
            }
            ValidationMode::OnDemand => {
                trace!(rule = %self.rule, "text changed; waiting for trigger");
            }
        }
    }

    /// Hook for the host to call after every change to the trigger binding
    pub fn on_trigger_changed(&self) {
        if self.mode != ValidationMode::OnDemand {
            trace!(rule = %self.rule, "trigger ignored in on-change mode");
            return;
        }
        if !self.trigger.get() {
            // Lowered by the host or by our own reset; the next rise is a new request
            self.reset_pending.set(false);
            return;
        }
        if self.reset_pending.get() {
            trace!(rule = %self.rule, "trigger already honoured; reset pending");
            return;
        }

        self.validate_now();
        self.has_been_triggered.set(true);
        self.schedule_trigger_reset();
    }

    /// Evaluate the rule against the current text and write the outcome,
    /// regardless of mode
    pub fn validate_now(&self) -> bool {
        let valid = self.text.with(|text| evaluate(text, self.rule));
        debug!(rule = %self.rule, mode = %self.mode, valid, "field validated");
        self.is_valid.set(valid);
        valid
    }

    fn schedule_trigger_reset(&self) {
        let trigger = self.trigger.clone();
        let pending = Rc::clone(&self.reset_pending);
        pending.set(true);
        debug!(rule = %self.rule, "trigger reset scheduled");

        self.scheduler.defer(Box::new(move || {
            pending.set(false);
            trigger.set(false);
            trace!("trigger reset");
        }));
    }

    /// Whether an on-demand evaluation has run at least once
    pub fn has_been_triggered(&self) -> bool {
        self.has_been_triggered.get()
    }

    /// Whether a trigger reset is waiting on the scheduler
    pub fn is_reset_pending(&self) -> bool {
        self.reset_pending.get()
    }

    /// Rule applied to the text
    pub fn rule(&self) -> ValidationRule {
        self.rule
    }

    /// When the rule is applied
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Scheduler receiving trigger resets
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<S: Scheduler + 'static> ValidationController<S> {
    /// Subscribe the controller to its own text and trigger bindings so that
    /// host writes drive it without explicit hook calls.
    ///
    /// The subscriptions live as long as the returned [`ObservedController`].
    pub fn observe(self) -> ObservedController<S> {
        let controller = Rc::new(self);

        let weak = Rc::downgrade(&controller);
        let text_subscription = controller.text.subscribe(move |_: &String| {
            if let Some(controller) = weak.upgrade() {
                controller.on_text_changed();
            }
        });

        let weak = Rc::downgrade(&controller);
        let trigger_subscription = controller.trigger.subscribe(move |_: &bool| {
            if let Some(controller) = weak.upgrade() {
                controller.on_trigger_changed();
            }
        });

        ObservedController {
            controller,
            _subscriptions: [text_subscription, trigger_subscription],
        }
    }
}

impl<S> FieldValidation for ValidationController<S> {
    fn text(&self) -> String {
        self.text.get()
    }

    fn is_valid(&self) -> bool {
        self.is_valid.get()
    }

    fn rule(&self) -> ValidationRule {
        self.rule
    }

    fn mode(&self) -> ValidationMode {
        self.mode
    }
}

impl<S> fmt::Debug for ValidationController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationController")
            .field("rule", &self.rule)
            .field("mode", &self.mode)
            .field("is_valid", &self.is_valid.get())
            .field("has_been_triggered", &self.has_been_triggered.get())
            .field("reset_pending", &self.reset_pending.get())
            .finish()
    }
}

/// A [`ValidationController`] wired to its bindings' change notifications.
///
/// Dropping it detaches the controller.
pub struct ObservedController<S = DeferredQueue> {
    controller: Rc<ValidationController<S>>,
    _subscriptions: [Subscription; 2],
}

impl<S> Deref for ObservedController<S> {
    type Target = ValidationController<S>;

    fn deref(&self) -> &Self::Target {
        &self.controller
    }
}

impl<S> fmt::Debug for ObservedController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObservedController")
            .field(&*self.controller)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Field {
        text: Binding<String>,
        is_valid: Binding<bool>,
        trigger: Binding<bool>,
    }

    impl Field {
        fn new() -> Self {
            Self {
                text: Binding::new(String::new()),
                is_valid: Binding::new(false),
                trigger: Binding::new(false),
            }
        }

        fn attach(&self, rule: ValidationRule, mode: ValidationMode) -> ValidationController {
            ValidationController::attach(
                self.text.clone(),
                self.is_valid.clone(),
                rule,
                mode,
                Some(self.trigger.clone()),
            )
        }
    }

    #[test]
    fn test_on_change_validates_every_edit() {
        let field = Field::new();
        let controller = field.attach(ValidationRule::Email, ValidationMode::OnChange);

        field.text.set("a@b.co".to_string());
        controller.on_text_changed();
        assert!(field.is_valid.get());

        field.text.set("a@b".to_string());
        controller.on_text_changed();
        assert!(!field.is_valid.get());
    }

    #[test]
    fn test_on_change_ignores_trigger() {
        let field = Field::new();
        let controller = field.attach(ValidationRule::Empty, ValidationMode::OnChange);

        field.text.set("x".to_string());
        field.trigger.set(true);
        controller.on_trigger_changed();

        assert!(!field.is_valid.get());
        assert!(field.trigger.get());
        assert!(!controller.has_been_triggered());
        assert!(controller.scheduler().is_empty());
    }

    #[test]
    fn test_on_demand_text_change_does_not_validate() {
        let field = Field::new();
        let controller = field.attach(ValidationRule::Email, ValidationMode::OnDemand);

        field.text.set("a@b.co".to_string());
        controller.on_text_changed();
        assert!(!field.is_valid.get());
    }

    #[test]
    fn test_on_demand_trigger_validates_and_resets() {
        let field = Field::new();
        let controller = field.attach(ValidationRule::Email, ValidationMode::OnDemand);

        field.text.set("a@b.co".to_string());
        field.trigger.set(true);
        controller.on_trigger_changed();

        assert!(field.is_valid.get());
        assert!(controller.has_been_triggered());
        // Reset waits for the next turn of the host loop
        assert!(field.trigger.get());
        assert!(controller.is_reset_pending());

        assert_eq!(controller.scheduler().run_pending(), 1);
        assert!(!field.trigger.get());
        assert!(!controller.is_reset_pending());
    }

    #[test]
    fn test_trigger_falling_edge_does_not_validate() {
        let field = Field::new();
        let controller = field.attach(ValidationRule::Empty, ValidationMode::OnDemand);

        field.text.set("x".to_string());
        controller.on_trigger_changed();
        assert!(!field.is_valid.get());
        assert!(!controller.has_been_triggered());
    }

    #[test]
    fn test_repeated_hook_call_before_reset_is_ignored() {
        let field = Field::new();
        let controller = field.attach(ValidationRule::Empty, ValidationMode::OnDemand);

        field.trigger.set(true);
        controller.on_trigger_changed();
        field.text.set("x".to_string());
        controller.on_trigger_changed();

        assert!(!field.is_valid.get());
        assert_eq!(controller.scheduler().pending(), 1);
    }

    #[test]
    fn test_reactivation_before_drain_validates_again() {
        let field = Field::new();
        let controller = field.attach(ValidationRule::PhoneNumber, ValidationMode::OnDemand);

        field.text.set("1234567890".to_string());
        field.trigger.set(true);
        controller.on_trigger_changed();
        assert!(field.is_valid.get());

        field.text.set("123".to_string());
        field.trigger.set(false);
        controller.on_trigger_changed();
        field.trigger.set(true);
        controller.on_trigger_changed();
        assert!(!field.is_valid.get());

        controller.scheduler().run_pending();
        assert!(!field.trigger.get());
        assert!(!controller.is_reset_pending());
    }

    #[test]
    fn test_observed_reactivation_before_drain_validates_again() {
        let field = Field::new();
        let observed = field
            .attach(ValidationRule::PhoneNumber, ValidationMode::OnDemand)
            .observe();

        field.text.set("1234567890".to_string());
        field.trigger.set(true);
        assert!(field.is_valid.get());

        field.text.set("123".to_string());
        field.trigger.set(false);
        field.trigger.set(true);
        assert!(!field.is_valid.get());

        assert_eq!(observed.scheduler().run_pending(), 2);
        assert!(!field.trigger.get());
    }

    #[test]
    fn test_triggering_twice_uses_latest_text() {
        let field = Field::new();
        let controller = field.attach(ValidationRule::PhoneNumber, ValidationMode::OnDemand);

        field.text.set("1234567890".to_string());
        field.trigger.set(true);
        controller.on_trigger_changed();
        controller.scheduler().run_pending();
        assert!(field.is_valid.get());

        field.text.set("123".to_string());
        field.trigger.set(true);
        controller.on_trigger_changed();
        controller.scheduler().run_pending();
        assert!(!field.is_valid.get());
        assert!(!field.trigger.get());
    }

    #[test]
    fn test_on_demand_without_trigger_never_runs() {
        let text = Binding::new("x".to_string());
        let is_valid = Binding::new(false);
        let controller = ValidationController::attach(
            text,
            is_valid.clone(),
            ValidationRule::Empty,
            ValidationMode::OnDemand,
            None,
        );

        controller.on_trigger_changed();
        assert!(!is_valid.get());
    }

    #[test]
    fn test_validate_now_ignores_mode() {
        let field = Field::new();
        let controller = field.attach(ValidationRule::Alphanumeric, ValidationMode::OnDemand);

        assert!(controller.validate_now());
        assert!(field.is_valid.get());
        assert!(!controller.has_been_triggered());
    }

    #[test]
    fn test_field_validation_view() {
        let field = Field::new();
        field.text.set("42".to_string());
        let controller = field.attach(ValidationRule::Numeric, ValidationMode::OnChange);
        controller.on_text_changed();

        let view: &dyn FieldValidation = &controller;
        assert_eq!(view.text(), "42");
        assert!(view.is_valid());
        assert_eq!(view.rule(), ValidationRule::Numeric);
        assert_eq!(view.mode(), ValidationMode::OnChange);
    }

    #[test]
    fn test_observed_on_change() {
        let field = Field::new();
        let observed = field
            .attach(ValidationRule::Email, ValidationMode::OnChange)
            .observe();

        field.text.set("a@b.co".to_string());
        assert!(field.is_valid.get());
        field.text.set("a@".to_string());
        assert!(!field.is_valid.get());

        drop(observed);
        field.text.set("a@b.co".to_string());
        assert!(!field.is_valid.get());
    }

    #[test]
    fn test_observed_on_demand() {
        let field = Field::new();
        let observed = field
            .attach(ValidationRule::Email, ValidationMode::OnDemand)
            .observe();

        field.text.set("a@b.co".to_string());
        assert!(!field.is_valid.get());

        field.trigger.set(true);
        assert!(field.is_valid.get());
        assert!(field.trigger.get());

        observed.scheduler().run_pending();
        assert!(!field.trigger.get());
        assert!(observed.has_been_triggered());
    }

    #[test]
    fn test_from_config_requires_trigger_for_on_demand() {
        let config = ValidatorConfig {
            rule: ValidationRule::Email,
            mode: ValidationMode::OnDemand,
        };
        let result = ValidationController::from_config(
            Binding::new(String::new()),
            Binding::new(false),
            None,
            &config,
        );
        assert!(matches!(result, Err(ConfigError::MissingTrigger)));
    }

    #[test]
    fn test_from_config() {
        let field = Field::new();
        let config = ValidatorConfig {
            rule: ValidationRule::Numeric,
            mode: ValidationMode::OnChange,
        };
        let controller = ValidationController::from_config(
            field.text.clone(),
            field.is_valid.clone(),
            None,
            &config,
        )
        .unwrap();

        assert_eq!(controller.rule(), ValidationRule::Numeric);
        assert_eq!(controller.mode(), ValidationMode::OnChange);
        field.text.set("3.14".to_string());
        controller.on_text_changed();
        assert!(field.is_valid.get());
    }
}
