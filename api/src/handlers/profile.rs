use validator::Validate;

use crate::AppState;
use crate::error::AppError;
use crate::models::health_profile::HealthProfile;

#[tracing::instrument(skip_all, fields(user_id = %profile.user_id))]
pub async fn save_profile(state: &AppState, profile: HealthProfile) -> Result<(), AppError> {
    profile.validate()?;
    state.profiles.save(profile).await;
    tracing::info!("health profile saved");
    Ok(())
}
