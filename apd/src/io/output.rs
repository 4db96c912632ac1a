use serde::{Deserialize, Serialize};

use crate::config::ApdConfig;
use crate::driver::SessionReport;
use crate::io::session::ExtSession;

#[derive(Serialize, Deserialize, Clone)]
pub struct ApdOutput {
    #[serde(flatten)]
    pub session: ExtSession,
    pub report: SessionReport,
    pub config: ApdConfig,
}
