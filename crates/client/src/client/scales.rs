//! Scale API operations.

use printnode_core::serde::OneOrMany;
use printnode_core::Scale;

use super::PrintNodeClient;
use crate::error::Result;
use crate::options::RequestOptions;

impl PrintNodeClient {
    /// Latest readings from every scale attached to a computer.
    pub async fn list_scales(&self, computer_id: i64, options: &RequestOptions) -> Result<Vec<Scale>> {
        self.get_json(&format!("/computer/{}/scales", computer_id), options)
            .await
    }

    /// Latest reading from one scale.
    ///
    /// Without `device_num` the first scale named `device_name` is used.
    pub async fn get_scale(
        &self,
        computer_id: i64,
        device_name: &str,
        device_num: Option<u32>,
        options: &RequestOptions,
    ) -> Result<Option<Scale>> {
        let name = urlencoding::encode(device_name);
        let path = match device_num {
            Some(num) => format!("/computer/{}/scale/{}/{}", computer_id, name, num),
            None => format!("/computer/{}/scales/{}", computer_id, name),
        };
        let readings: OneOrMany<Scale> = self.get_json(&path, options).await?;
        Ok(readings.into_first())
    }
}
