use crate::error::FormError;
use crate::role::Role;

/// Maximum characters the mobile-number field accepts.
pub const PHONE_MAX_LEN: usize = 10;
/// Characters required before the OTP request can be sent.
pub const PHONE_MIN_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnboardingStep {
    #[default]
    Splash,
    Role,
    Login,
}

/// Splash → role picker → phone login stepper shown to anonymous users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OnboardingFlow {
    step: OnboardingStep,
    selected_role: Option<Role>,
    phone: String,
}

impl OnboardingFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> OnboardingStep {
        self.step
    }

    #[must_use]
    pub const fn selected_role(&self) -> Option<Role> {
        self.selected_role
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn get_started(&mut self) {
        if self.step == OnboardingStep::Splash {
            self.step = OnboardingStep::Role;
        }
    }

    pub fn choose_role(&mut self, role: Role) {
        if self.step == OnboardingStep::Role {
            log::debug!("onboarding role picked: {role}");
            self.selected_role = Some(role);
            self.step = OnboardingStep::Login;
        }
    }

    pub fn back(&mut self) {
        if self.step == OnboardingStep::Login {
            self.step = OnboardingStep::Role;
        }
    }

    /// Store the field contents, keeping at most [`PHONE_MAX_LEN`] characters.
    ///
    /// Any characters are accepted; there is no digit or country-code check.
    pub fn set_phone(&mut self, text: &str) {
        self.phone = text.chars().take(PHONE_MAX_LEN).collect();
    }

    #[must_use]
    pub fn phone_len(&self) -> usize {
        self.phone.chars().count()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phone_len() >= PHONE_MIN_LEN
    }

    /// Finish onboarding, yielding the role to hand to the session gate.
    ///
    /// # Errors
    ///
    /// [`FormError::PhoneTooShort`] while fewer than ten characters are
    /// entered, [`FormError::RoleNotSelected`] if no role card was picked.
    pub fn submit(&self) -> Result<Role, FormError> {
        if !self.can_submit() {
            return Err(FormError::PhoneTooShort {
                len: self.phone_len(),
            });
        }
        self.selected_role.ok_or(FormError::RoleNotSelected)
    }
}
