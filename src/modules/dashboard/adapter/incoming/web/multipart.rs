use actix_multipart::{Multipart, MultipartError};
use futures::TryStreamExt;

use crate::modules::form::FormState;
use crate::modules::gateway::application::ports::outgoing::UploadFile;

const MAX_FILE_BYTES: usize = 10 * 1024 * 1024;
const MAX_TEXT_BYTES: usize = 256 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum FormReadError {
    #[error("Malformed form data: {0}")]
    Malformed(String),

    #[error("{field} is larger than {limit} bytes")]
    TooLarge { field: String, limit: usize },

    #[error("{0} is not valid UTF-8 text")]
    Encoding(String),
}

fn malformed(e: MultipartError) -> FormReadError {
    FormReadError::Malformed(e.to_string())
}

/// Buffers a `multipart/form-data` body into a [`FormState`].
///
/// Parts with a file name become files, everything else a text value. A file
/// input left empty arrives with a blank file name and is skipped. Browsers
/// submit textarea line breaks as `\r\n`; text values are stored with `\n`.
pub async fn read_form(mut payload: Multipart) -> Result<FormState, FormReadError> {
    let mut state = FormState::default();

    while let Some(mut field) = payload.try_next().await.map_err(malformed)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let content_type = field.content_type().map(|mime| mime.to_string());

        let limit = if file_name.is_some() {
            MAX_FILE_BYTES
        } else {
            MAX_TEXT_BYTES
        };
        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(malformed)? {
            if bytes.len() + chunk.len() > limit {
                return Err(FormReadError::TooLarge { field: name, limit });
            }
            bytes.extend_from_slice(&chunk);
        }

        match file_name {
            Some(file_name) => {
                if !file_name.trim().is_empty() && !bytes.is_empty() {
                    state.attach_file(
                        name,
                        UploadFile {
                            file_name,
                            content_type,
                            bytes,
                        },
                    );
                }
            }
            None => match String::from_utf8(bytes) {
                Ok(text) => state.set_value(name, text.replace("\r\n", "\n")),
                Err(_) => return Err(FormReadError::Encoding(name)),
            },
        }
    }

    Ok(state)
}
