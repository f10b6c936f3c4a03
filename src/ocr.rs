//! OCR backend.
//!
//! OCR is an explicit capability behind the [`OcrBackend`] trait with one
//! entry point, selected when the command starts. There is no call-time
//! probing for whichever function happens to exist. The shipped backend is
//! `ocrs`, a pure-Rust engine running pre-trained models through `rten`.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use ocrs::{ImageSource, OcrEngine, OcrEngineParams};
use rten::Model;

use crate::error::{DocbenchError, DocbenchResult};

/// Environment variable overriding the model directory.
pub const MODELS_ENV: &str = "DOCBENCH_OCR_MODELS";

const DETECTION_MODEL_FILENAME: &str = "text-detection.rten";
const RECOGNITION_MODEL_FILENAME: &str = "text-recognition.rten";

/// Image-to-text capability.
pub trait OcrBackend {
    fn image_to_text(&self, image: &DynamicImage) -> DocbenchResult<String>;
}

/// Where to find the detection and recognition model files.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    pub detection_model_path: PathBuf,
    pub recognition_model_path: PathBuf,
}

impl OcrConfig {
    /// Build a config from an explicit `--models-dir` flag, falling back to
    /// the `DOCBENCH_OCR_MODELS` environment variable, then to the shared
    /// ocrs model cache (`~/.cache/ocrs` on Linux).
    pub fn resolve(models_dir: Option<&Path>) -> Self {
        let dir = models_dir
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(MODELS_ENV).map(PathBuf::from))
            .unwrap_or_else(default_model_dir);
        Self::from_dir(&dir)
    }

    /// Config pointing at `text-detection.rten` / `text-recognition.rten`
    /// inside `dir`.
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            detection_model_path: dir.join(DETECTION_MODEL_FILENAME),
            recognition_model_path: dir.join(RECOGNITION_MODEL_FILENAME),
        }
    }

    /// Verify that both model files exist.
    ///
    /// Failing here is the configuration error the commands report, so the
    /// message names the missing path and how to fix it.
    pub fn validate(&self) -> DocbenchResult<()> {
        for path in [&self.detection_model_path, &self.recognition_model_path] {
            if !path.exists() {
                return Err(DocbenchError::OcrUnavailable(format!(
                    "model file not found at {}; download the ocrs models \
                     (e.g. run `ocrs-cli` once) or point --models-dir / {} at them",
                    path.display(),
                    MODELS_ENV,
                )));
            }
        }
        Ok(())
    }
}

fn default_model_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ocrs")
}

/// The `ocrs` OCR backend.
///
/// Model loading is the expensive step; construct once per command and reuse
/// for every page. Debug builds of `rten` are drastically slower; OCR is
/// meant to run from release binaries.
pub struct OcrsBackend {
    engine: OcrEngine,
}

impl std::fmt::Debug for OcrsBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OcrsBackend").finish_non_exhaustive()
    }
}

impl OcrsBackend {
    pub fn new(config: OcrConfig) -> DocbenchResult<Self> {
        config.validate()?;

        let detection_model = Model::load_file(&config.detection_model_path).map_err(|err| {
            DocbenchError::OcrUnavailable(format!(
                "failed to load detection model from {}: {err}",
                config.detection_model_path.display()
            ))
        })?;
        let recognition_model =
            Model::load_file(&config.recognition_model_path).map_err(|err| {
                DocbenchError::OcrUnavailable(format!(
                    "failed to load recognition model from {}: {err}",
                    config.recognition_model_path.display()
                ))
            })?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            ..Default::default()
        })
        .map_err(|err| {
            DocbenchError::OcrUnavailable(format!("failed to initialise OCR engine: {err}"))
        })?;

        Ok(Self { engine })
    }
}

impl OcrBackend for OcrsBackend {
    fn image_to_text(&self, image: &DynamicImage) -> DocbenchResult<String> {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();

        let source = ImageSource::from_bytes(rgb.as_raw(), (width, height))
            .map_err(|err| DocbenchError::Ocr(format!("bad image source ({width}x{height}): {err}")))?;
        let input = self
            .engine
            .prepare_input(source)
            .map_err(|err| DocbenchError::Ocr(format!("preprocessing failed: {err}")))?;

        self.engine
            .get_text(&input)
            .map_err(|err| DocbenchError::Ocr(format!("recognition failed: {err}")))
    }
}

/// OCR a single image file.
pub fn image_file_to_text(backend: &dyn OcrBackend, path: &Path) -> DocbenchResult<String> {
    let image = image::open(path)?;
    backend.image_to_text(&image)
}

/// OCR a whole PDF by rasterizing each page and recognising it in turn.
/// Pages are separated by a blank line in the output.
pub fn pdf_to_text(backend: &dyn OcrBackend, input: &Path) -> DocbenchResult<String> {
    let pages = crate::raster::pdf_to_page_images(input)?;

    let mut out = String::new();
    for (index, page) in pages.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(backend.image_to_text(page)?.trim_end());
        out.push('\n');
    }
    Ok(out)
}
