//! TorchScript-backed predictor
//!
//! Wraps a serialized `tch::CModule` artifact. The output head is resolved
//! once at load time with a probe forward pass instead of re-inspecting
//! shapes per sample.

use tch::{CModule, Device, Kind, Tensor};

use crate::data::image_loader::ImageInput;
use crate::error::{Error, Result};
use crate::model::output::OutputHead;
use crate::model::predictor::Predictor;
use crate::utils::config::ModelConfig;

/// Predictor backed by a TorchScript module
pub struct TorchPredictor {
    module: CModule,
    head: OutputHead,
    img_height: u32,
    img_width: u32,
}

impl TorchPredictor {
    /// Load a TorchScript artifact.
    ///
    /// A missing file and a file that fails to deserialize are distinct
    /// error kinds so callers can report them differently.
    pub fn load(config: &ModelConfig) -> Result<Self> {
        if !config.model_path.exists() {
            return Err(Error::ModelNotFound(config.model_path.clone()));
        }

        let module = CModule::load_on_device(&config.model_path, Device::Cpu)
            .map_err(|e| Error::ModelLoad(e.to_string()))?;

        // Probe with a zero batch-of-one to learn the declared output shape
        let probe = Tensor::zeros(
            &[1, config.img_height as i64, config.img_width as i64, 3],
            (Kind::Float, Device::Cpu),
        );
        let out = module
            .forward_ts(&[probe])
            .map_err(|e| Error::ModelLoad(format!("probe forward pass failed: {e}")))?;
        let head = OutputHead::from_shape(&out.size());

        Ok(Self {
            module,
            head,
            img_height: config.img_height,
            img_width: config.img_width,
        })
    }
}

impl Predictor for TorchPredictor {
    fn output_head(&self) -> OutputHead {
        self.head
    }

    fn predict(&self, input: &ImageInput) -> Result<Vec<f32>> {
        if input.height() != self.img_height as usize || input.width() != self.img_width as usize {
            return Err(Error::Inference(format!(
                "input size mismatch: expected {}x{}, got {}x{}",
                self.img_height,
                self.img_width,
                input.height(),
                input.width()
            )));
        }

        let tensor = Tensor::from_slice(input.as_slice()).reshape(&[
            1,
            self.img_height as i64,
            self.img_width as i64,
            3,
        ]);

        let out = self
            .module
            .forward_ts(&[tensor])
            .map_err(|e| Error::Inference(e.to_string()))?;

        let flat = out.flatten(0, -1);
        Vec::<f32>::try_from(&flat).map_err(|e| Error::Inference(e.to_string()))
    }
}
