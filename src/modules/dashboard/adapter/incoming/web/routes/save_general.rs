use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use tracing::debug;

use crate::modules::crop::{CropDescriptor, CropError};
use crate::modules::dashboard::adapter::incoming::web::extractors::AdminSession;
use crate::modules::dashboard::adapter::incoming::web::multipart::read_form;
use crate::modules::dashboard::adapter::incoming::web::page::{dashboard_location, GENERAL_TAB};
use crate::modules::dashboard::application::domain::{CropChange, Notice, SaveGeneralCommand};
use crate::modules::form::FormState;
use crate::modules::portfolio::application::domain::{GeneralSettings, Socials};
use crate::shared::web::see_other;
use crate::AppState;

fn text(form: &FormState, name: &str) -> Option<String> {
    let value = form.value(name).trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn number(form: &FormState, name: &str) -> Option<f64> {
    text(form, name).map(|raw| raw.parse::<f64>().unwrap_or(f64::NAN))
}

/// Crop chosen in the editor, posted as hidden inputs. `clearCrop` wins over
/// a posted rectangle.
fn crop_change(form: &FormState) -> Result<CropChange, CropError> {
    if text(form, "clearCrop").is_some() {
        return Ok(CropChange::Clear);
    }
    let Some(width) = number(form, "cropWidth") else {
        return Ok(CropChange::Keep);
    };

    CropDescriptor::capture(
        number(form, "cropX").unwrap_or(0.0),
        number(form, "cropY").unwrap_or(0.0),
        width,
        number(form, "cropHeight").unwrap_or(0.0),
        number(form, "cropRotate"),
        number(form, "cropScaleX"),
        number(form, "cropScaleY"),
    )
    .map(CropChange::Set)
}

pub fn general_command(mut form: FormState) -> Result<SaveGeneralCommand, CropError> {
    let crop = crop_change(&form)?;

    Ok(SaveGeneralCommand {
        settings: GeneralSettings {
            hero_name: text(&form, "heroName"),
            hero_subtitle: text(&form, "heroSubtitle"),
            about_text: text(&form, "aboutText"),
            resume_url: text(&form, "resumeUrl"),
            socials: Socials {
                linkedin: text(&form, "linkedin"),
                github: text(&form, "github"),
                facebook: text(&form, "facebook"),
                email: text(&form, "email"),
            },
            theme: text(&form, "theme"),
            hero_photo_style: text(&form, "heroPhotoStyle"),
        },
        profile_image_url: text(&form, "profileImageUrl"),
        new_profile_image: form.files.remove("profileImage"),
        crop,
    })
}

#[post("/admin/general")]
pub async fn save_general_handler(
    data: web::Data<AppState>,
    session: AdminSession,
    payload: Multipart,
) -> impl Responder {
    let notice = match read_form(payload).await {
        Err(e) => Notice::error(format!("Error: {e}")),
        Ok(form) => match general_command(form) {
            Err(e) => Notice::error(format!("Error: {e}")),
            Ok(command) => match data.dashboard.save_general.execute(&session.token, command).await {
                Ok(outcome) => {
                    debug!(
                        theme = ?outcome.config.theme,
                        cropped = outcome.config.profile_crop.is_some(),
                        "General settings applied"
                    );
                    Notice::with_warnings("Settings saved.", &outcome.warnings)
                }
                Err(e) => Notice::error(format!("Error: {e}")),
            },
        },
    };

    see_other(&dashboard_location(Some(GENERAL_TAB), Some(&notice)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::gateway::application::ports::outgoing::UploadFile;

    fn form(pairs: &[(&str, &str)]) -> FormState {
        let mut state = FormState::default();
        for (k, v) in pairs {
            state.set_value(*k, *v);
        }
        state
    }

    #[test]
    fn blank_inputs_become_unset() {
        let command = general_command(form(&[
            ("heroName", " Ada "),
            ("heroSubtitle", ""),
            ("github", "https://github.com/ada"),
        ]))
        .unwrap();

        assert_eq!(command.settings.hero_name.as_deref(), Some("Ada"));
        assert!(command.settings.hero_subtitle.is_none());
        assert_eq!(
            command.settings.socials.github.as_deref(),
            Some("https://github.com/ada")
        );
        assert_eq!(command.crop, CropChange::Keep);
    }

    #[test]
    fn posted_rectangle_sets_crop() {
        let command = general_command(form(&[
            ("cropX", "10"),
            ("cropY", "20"),
            ("cropWidth", "300"),
            ("cropHeight", "300"),
        ]))
        .unwrap();

        assert_eq!(
            command.crop,
            CropChange::Set(
                CropDescriptor::capture(10.0, 20.0, 300.0, 300.0, None, None, None).unwrap()
            )
        );
    }

    #[test]
    fn clear_flag_wins() {
        let command = general_command(form(&[("cropWidth", "300"), ("clearCrop", "on")])).unwrap();

        assert_eq!(command.crop, CropChange::Clear);
    }

    #[test]
    fn unparsable_crop_is_rejected() {
        let err = general_command(form(&[("cropWidth", "wide"), ("cropHeight", "10")])).unwrap_err();

        assert_eq!(err, CropError::NotFinite("width"));
    }

    #[test]
    fn picked_photo_is_carried() {
        let mut state = form(&[("profileImageUrl", "https://cdn/old.png")]);
        state.attach_file(
            "profileImage",
            UploadFile {
                file_name: "me.png".to_string(),
                content_type: None,
                bytes: vec![1],
            },
        );

        let command = general_command(state).unwrap();

        assert_eq!(command.new_profile_image.unwrap().file_name, "me.png");
        assert_eq!(command.profile_image_url.as_deref(), Some("https://cdn/old.png"));
    }
}
