//! Tool handler abstraction.
//!
//! Every registered tool is backed by a [`ToolHandler`]: an async unit that
//! receives the caller's arguments as a JSON object and yields a JSON value or
//! a [`ToolError`]. Handlers are responsible for binding the keys they expect;
//! [`bind_arguments`] does that against the declared signature and serde so
//! an unexpected name, a missing parameter or a mistyped value fails with a
//! descriptive message.

use std::sync::Arc;

use futures::future::BoxFuture;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::ToolError;

/// Named arguments passed to a tool.
pub type Arguments = Map<String, Value>;

/// Future returned by closure-based handlers.
pub type HandlerFuture = BoxFuture<'static, Result<Value, ToolError>>;

/// Trait implemented by everything that can back a registered tool.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Run the tool with the given named arguments.
    async fn call(&self, arguments: Arguments) -> Result<Value, ToolError>;
}

/// Adapter turning a closure into a [`ToolHandler`].
pub struct FnHandler<F> {
    func: F,
}

#[async_trait::async_trait]
impl<F> ToolHandler for FnHandler<F>
where
    F: Fn(Arguments) -> HandlerFuture + Send + Sync,
{
    async fn call(&self, arguments: Arguments) -> Result<Value, ToolError> {
        (self.func)(arguments).await
    }
}

/// Wrap a closure returning a boxed future as a shareable handler.
pub fn handler_fn<F>(func: F) -> Arc<dyn ToolHandler>
where
    F: Fn(Arguments) -> HandlerFuture + Send + Sync + 'static,
{
    Arc::new(FnHandler { func })
}

/// Bind a named-argument map to a typed parameter struct.
///
/// Keys outside `P`'s signature are rejected before deserialization.
pub fn bind_arguments<P>(arguments: Arguments) -> Result<P, ToolError>
where
    P: DeserializeOwned + JsonSchema,
{
    let signature = parameter_signature::<P>();
    if let Some(unexpected) = arguments.keys().find(|k| !signature.contains_key(*k)) {
        return Err(ToolError::invalid_arguments(format!(
            "unexpected keyword argument '{}'",
            unexpected
        )));
    }

    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Declared parameter signature of `P`: parameter name to JSON Schema shape.
pub fn parameter_signature<P: JsonSchema>() -> Map<String, Value> {
    serde_json::to_value(schemars::schema_for!(P))
        .ok()
        .and_then(|schema| schema.get("properties").and_then(Value::as_object).cloned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, JsonSchema)]
    struct GreetParams {
        /// Who to greet.
        name: String,
        #[serde(default)]
        shout: bool,
    }

    fn args(value: Value) -> Arguments {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_bind_arguments_applies_defaults() {
        let params: GreetParams = bind_arguments(args(json!({ "name": "ana" }))).unwrap();
        assert_eq!(params.name, "ana");
        assert!(!params.shout);
    }

    #[test]
    fn test_bind_arguments_rejects_unknown_key() {
        let err = bind_arguments::<GreetParams>(args(json!({ "name": "ana", "loud": true })))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_bind_arguments_rejects_wrong_type() {
        let err = bind_arguments::<GreetParams>(args(json!({ "name": 7 }))).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_bind_arguments_rejects_missing_key() {
        let err = bind_arguments::<GreetParams>(Arguments::new()).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_parameter_signature_lists_fields() {
        let signature = parameter_signature::<GreetParams>();
        assert_eq!(signature.len(), 2);
        assert_eq!(signature["name"]["type"], "string");
        assert!(signature.contains_key("shout"));
    }

    #[tokio::test]
    async fn test_handler_fn_forwards_arguments() {
        let handler = handler_fn(|arguments| async move { Ok(Value::Object(arguments)) }.boxed());
        let result = handler.call(args(json!({ "a": 1 }))).await.unwrap();
        assert_eq!(result, json!({ "a": 1 }));
    }
}
