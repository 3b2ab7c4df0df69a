use async_trait::async_trait;
use dioxus::document::eval;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OpenLinkError {
    #[error("the link was blocked")]
    Blocked,

    #[error("could not reach the webview: {0}")]
    Script(String),
}

/// Opens external links outside the app window.
#[async_trait(?Send)]
pub trait LinkOpener: Send + Sync {
    async fn open(&self, link: &Url) -> Result<(), OpenLinkError>;
}

/// Asks the webview to open the link; the desktop shell hands new windows
/// to the system browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptLinkOpener;

const OPEN_LINK_SCRIPT_TEMPLATE: &str = r#"
    const opened = window.open("{link}", "_blank");
    if (opened) { opened.opener = null; }
    return opened !== null && opened !== undefined;
"#;

fn open_link_script(link: &Url) -> String {
    let escaped = link.as_str().replace('\\', "\\\\").replace('"', "\\\"");
    OPEN_LINK_SCRIPT_TEMPLATE.replace("{link}", &escaped)
}

#[async_trait(?Send)]
impl LinkOpener for ScriptLinkOpener {
    async fn open(&self, link: &Url) -> Result<(), OpenLinkError> {
        let opened = eval(&open_link_script(link))
            .join::<bool>()
            .await
            .map_err(|err| OpenLinkError::Script(err.to_string()))?;
        if opened {
            Ok(())
        } else {
            Err(OpenLinkError::Blocked)
        }
    }
}
