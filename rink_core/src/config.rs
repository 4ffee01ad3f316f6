use crate::Params;
use thiserror::Error;

/// Host-tunable match settings, propagated to every peer. Radius changes
/// resize the existing circles in place rather than replacing them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSettings {
    pub max_puck_speed: f32,
    pub puck_radius: f32,
    pub racket_radius: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_puck_speed: Params::MAX_PUCK_SPEED,
            puck_radius: Params::PUCK_RADIUS,
            racket_radius: Params::RACKET_RADIUS,
        }
    }
}

/// Rejected tuning input. The previous settings stay in effect.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("{name} must be a finite positive number, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} of {value} does not fit the rink")]
    TooLarge { name: &'static str, value: f32 },
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_positive("max_puck_speed", self.max_puck_speed)?;
        check_radius("puck_radius", self.puck_radius)?;
        check_radius("racket_radius", self.racket_radius)?;
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::NotPositive { name, value })
    }
}

fn check_radius(name: &'static str, value: f32) -> Result<(), SettingsError> {
    check_positive(name, value)?;
    // A circle this large could not sit inside the rink at all.
    if value >= Params::WIDTH / 2.0 - Params::BORDER_SIZE {
        return Err(SettingsError::TooLarge { name, value });
    }
    Ok(())
}
