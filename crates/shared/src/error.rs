use thiserror::Error;

#[cfg(feature = "wasm")]
pub use wasm::*;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("push data is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("push data is json null")]
    Null,
}

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Payload Error: {0}")]
    Payload(#[from] PayloadError),
    #[error("Serialize Error: {0}")]
    Serialize(String),
    #[cfg(feature = "wasm")]
    #[error("Js Error: {0}")]
    Js(#[from] JsError),
}

#[cfg(feature = "wasm")]
mod wasm {
    use super::WorkerError;
    use thiserror::Error;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::js_sys::{
        Error as GenericJsError, RangeError as JsRangeError, ReferenceError as JsReferenceError,
        SyntaxError as JsSyntaxError, TypeError as JsTypeError,
    };

    #[derive(Debug, Clone, Error)]
    pub enum JsError {
        #[error("GenericJs Error: {0:?}")]
        GenericJs(GenericJsError),
        #[error("JsRange Error: {0:?}")]
        JsRange(JsRangeError),
        #[error("JsReference Error: {0:?}")]
        JsReference(JsReferenceError),
        #[error("JsSyntax Error: {0:?}")]
        JsSyntax(JsSyntaxError),
        #[error("JsType Error: {0:?}")]
        JsType(JsTypeError),
        #[error("UnknownJsValue Error: {0}")]
        UnknownJsValue(String),
    }

    impl From<JsValue> for JsError {
        fn from(err: JsValue) -> JsError {
            if err.is_instance_of::<JsRangeError>() {
                return JsError::JsRange(err.into());
            }
            if err.is_instance_of::<JsReferenceError>() {
                return JsError::JsReference(err.into());
            }
            if err.is_instance_of::<JsSyntaxError>() {
                return JsError::JsSyntax(err.into());
            }
            if err.is_instance_of::<JsTypeError>() {
                return JsError::JsType(err.into());
            }
            // Checked last, every class above is also an instance of Error
            if err.is_instance_of::<GenericJsError>() {
                return JsError::GenericJs(err.into());
            }
            JsError::UnknownJsValue(format!("{:?}", err))
        }
    }

    impl From<JsValue> for WorkerError {
        fn from(value: JsValue) -> Self {
            Self::Js(JsError::from(value))
        }
    }

    impl From<WorkerError> for JsValue {
        fn from(err: WorkerError) -> JsValue {
            match err {
                // Hand the original exception back so the browser reports it as is
                WorkerError::Js(JsError::GenericJs(e)) => e.into(),
                WorkerError::Js(JsError::JsRange(e)) => e.into(),
                WorkerError::Js(JsError::JsReference(e)) => e.into(),
                WorkerError::Js(JsError::JsSyntax(e)) => e.into(),
                WorkerError::Js(JsError::JsType(e)) => e.into(),
                e => GenericJsError::new(&e.to_string()).into(),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_json_error_converts_to_worker_error() {
        let e = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let e = WorkerError::from(PayloadError::from(e));
        assert!(matches!(e, WorkerError::Payload(PayloadError::Json(_))));
        assert!(e.to_string().starts_with("Payload Error: push data is not valid json"));
    }

    #[test]
    fn test_null_error_message() {
        assert_eq!(
            WorkerError::from(PayloadError::Null).to_string(),
            "Payload Error: push data is json null"
        );
    }
}
