use std::sync::Arc;
use std::time::Duration;

use leptess::LepTess;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::config::OcrConfig;
use crate::error::{EtlError, Result};

enum OcrBackend {
    Local { tesseract: Arc<Mutex<LepTess>> },
    Unavailable { reason: String },
}

pub struct OcrProvider {
    backend: OcrBackend,
    timeout_secs: u64,
}

impl OcrProvider {
    pub fn new(config: &OcrConfig) -> Result<Self> {
        let backend = match LepTess::new(None, &config.languages) {
            Ok(lt) => {
                info!(languages = %config.languages, "Tesseract OCR initialized");
                OcrBackend::Local {
                    tesseract: Arc::new(Mutex::new(lt)),
                }
            }
            Err(e) => {
                let reason = format!("Tesseract not available: {e}");
                warn!("{}", reason);
                OcrBackend::Unavailable { reason }
            }
        };

        Ok(Self {
            backend,
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, OcrBackend::Unavailable { .. })
    }

    /// Run OCR over encoded image bytes.
    ///
    /// Bounded by the configured timeout so one pathological image cannot
    /// stall the rest of the batch.
    pub async fn ocr(&self, image_bytes: &[u8]) -> Result<String> {
        let timeout_duration = Duration::from_secs(self.timeout_secs);

        let result = tokio::time::timeout(timeout_duration, self.ocr_internal(image_bytes)).await;

        match result {
            Ok(inner_result) => inner_result,
            Err(_) => Err(EtlError::Ocr(format!(
                "OCR operation timed out after {} seconds",
                self.timeout_secs
            ))),
        }
    }

    async fn ocr_internal(&self, image_bytes: &[u8]) -> Result<String> {
        match &self.backend {
            OcrBackend::Local { tesseract } => {
                let bytes = image_bytes.to_vec();
                let tesseract = Arc::clone(tesseract);

                let text = tokio::task::spawn_blocking(move || {
                    let mut lt = tesseract.blocking_lock();
                    lt.set_image_from_mem(&bytes)
                        .map_err(|e| EtlError::Ocr(format!("Failed to set image: {e}")))?;
                    lt.get_utf8_text()
                        .map_err(|e| EtlError::Ocr(format!("Failed to extract text: {e}")))
                })
                .await
                .map_err(|e| EtlError::Ocr(format!("OCR task panicked: {e}")))??;

                Ok(text.trim().to_string())
            }
            OcrBackend::Unavailable { reason } => Err(EtlError::OcrUnavailable(reason.clone())),
        }
    }
}
