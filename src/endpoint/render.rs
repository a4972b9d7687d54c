//! Parameter rendering
//!
//! Turns an endpoint template plus a parameter list into a concrete path and
//! query string. Rendering is pure: the template is read, never modified.

use super::types::{Endpoint, Param, ParamKind, ParamValue, RenderedUri};
use crate::error::{Error, Result};

/// Prefix marking a placeholder segment in a URI template
pub const PATH_MARKER: char = ':';

/// Render `params` against `endpoint` according to its [`ParamKind`]
pub fn render(endpoint: &Endpoint, params: &[Param]) -> Result<RenderedUri> {
    match endpoint.param_kind {
        ParamKind::Path => Ok(RenderedUri {
            path: render_path(&endpoint.uri, params)?,
            query: Vec::new(),
        }),
        ParamKind::Query => Ok(RenderedUri {
            path: endpoint.uri.clone(),
            query: render_query(params.iter()),
        }),
        ParamKind::PathAndQuery => render_path_and_query(endpoint, params),
    }
}

/// Placeholder token for a key, whether or not the key carries the marker
fn placeholder(key: &str) -> String {
    format!("{PATH_MARKER}{}", key.trim_start_matches(PATH_MARKER))
}

fn render_path(template: &str, params: &[Param]) -> Result<String> {
    let mut path = template.to_string();
    for param in params {
        let Some(value) = param.value.as_scalar() else {
            return Err(Error::unsupported_param(
                &param.key,
                param.value.type_name(),
            ));
        };
        path = path.replace(&placeholder(&param.key), &value);
    }
    Ok(path)
}

fn render_query<'a>(params: impl Iterator<Item = &'a Param>) -> Vec<(String, String)> {
    params
        .filter(|p| !p.value.is_empty())
        .map(|p| (p.key.clone(), p.value.to_query_value()))
        .collect()
}

fn render_path_and_query(endpoint: &Endpoint, params: &[Param]) -> Result<RenderedUri> {
    let mut path = endpoint.uri.clone();

    for name in endpoint
        .required
        .iter()
        .filter(|k| k.starts_with(PATH_MARKER))
    {
        let param = params
            .iter()
            .find(|p| &p.key == name)
            .ok_or_else(|| Error::missing_path_param(name.clone()))?;

        let value = match &param.value {
            ParamValue::String(s) if s.is_empty() => {
                return Err(Error::missing_path_param(name.clone()))
            }
            other => other
                .as_scalar()
                .ok_or_else(|| Error::unsupported_param(name.clone(), other.type_name()))?,
        };
        path = path.replace(&placeholder(name), &value);
    }

    let query = render_query(params.iter().filter(|p| !p.key.starts_with(PATH_MARKER)));

    Ok(RenderedUri { path, query })
}
