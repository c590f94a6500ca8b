use melange_vex::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock DocumentMerger that records its inputs and delegates or fails
#[derive(Clone, Default)]
pub struct MockDocumentMerger {
    pub calls: Arc<Mutex<Vec<(MergeOptions, Vec<VexDocument>)>>>,
    failure: Option<String>,
}

impl MockDocumentMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<(MergeOptions, Vec<VexDocument>)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl DocumentMerger for MockDocumentMerger {
    fn merge(&self, options: &MergeOptions, documents: Vec<VexDocument>) -> Result<VexDocument> {
        self.calls
            .lock()
            .unwrap()
            .push((options.clone(), documents.clone()));

        if let Some(message) = &self.failure {
            return Err(VexError::Merge {
                details: message.clone(),
            }
            .into());
        }

        OpenVexMerger::new().merge(options, documents)
    }
}
