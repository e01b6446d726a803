//! Inference Engine - ONNX Runtime Integration
//!
//! Drives one forward pass per scan: lexical features + tf-idf text block
//! → `[1, width]` tensor → probability distribution → argmax verdict.

use ndarray::Array2;
use ort::value::Value;

use crate::logic::features::{lexical, FEATURE_COUNT};
use crate::logic::threat::types::ClassifierVerdict;
use crate::logic::url;
use crate::logic::ScanError;

use super::bundle::ModelBundle;

impl ModelBundle {
    /// Classify a raw URL.
    ///
    /// The numeric block is measured over the RAW string, the text block
    /// over the normalized form - the same split the trainer used. Column
    /// order is numeric first, text second.
    pub fn predict(&self, raw_url: &str) -> Result<ClassifierVerdict, ScanError> {
        let start_time = std::time::Instant::now();

        let numeric = lexical::feature_vector(raw_url);
        let text_row = self.vectorizer.transform(&url::normalize(raw_url));

        let width = FEATURE_COUNT + text_row.len();
        let mut input_data: Vec<f32> = Vec::with_capacity(width);
        input_data.extend_from_slice(numeric.as_slice());
        input_data.extend_from_slice(&text_row);

        let input_array = Array2::<f32>::from_shape_vec((1, width), input_data)
            .map_err(|e| ScanError::Prediction(format!("Array error: {e}")))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| ScanError::Prediction(format!("Tensor error: {e}")))?;

        let mut session = self.session.write();

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ScanError::Prediction(format!("Inference failed: {e}")))?;

        let output = outputs
            .get(&self.output_name)
            .ok_or_else(|| ScanError::Prediction(format!("No output '{}'", self.output_name)))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| ScanError::Prediction(format!("Extract error: {e}")))?;

        let probabilities = output_tensor.1;

        if probabilities.len() != self.labels.len() {
            return Err(ScanError::Prediction(format!(
                "model returned {} probabilities for {} labels",
                probabilities.len(),
                self.labels.len()
            )));
        }

        // Argmax; ties resolve to the first (lowest-index) label
        let mut best = 0;
        for (index, &p) in probabilities.iter().enumerate() {
            if p > probabilities[best] {
                best = index;
            }
        }

        let distribution = self
            .labels
            .iter()
            .cloned()
            .zip(probabilities.iter().copied())
            .collect();

        tracing::debug!(
            label = %self.labels[best],
            confidence = probabilities[best],
            inference_time_us = start_time.elapsed().as_micros() as u64,
            "classifier pass"
        );

        Ok(ClassifierVerdict {
            label: self.labels[best].clone(),
            confidence: probabilities[best],
            probabilities: distribution,
        })
    }
}
