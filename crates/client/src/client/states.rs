//! Print job state history.
//!
//! The API groups states per job, so every endpoint answers with a list of lists.

use printnode_core::PrintJobState;

use super::PrintNodeClient;
use crate::error::Result;
use crate::options::RequestOptions;

impl PrintNodeClient {
    /// State history of one print job, oldest first. Empty if the job is unknown.
    pub async fn get_print_job_states(
        &self,
        print_job_id: i64,
        options: &RequestOptions,
    ) -> Result<Vec<PrintJobState>> {
        let groups: Vec<Vec<PrintJobState>> = self
            .get_json(&format!("/printjobs/{}/states", print_job_id), options)
            .await?;
        Ok(groups.into_iter().next().unwrap_or_default())
    }

    /// State histories of all print jobs, one list per job.
    pub async fn list_print_job_states(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<Vec<PrintJobState>>> {
        self.get_json("/printjobs/states", options).await
    }

    /// State histories of several print jobs, one list per job.
    pub async fn get_print_job_set_states(
        &self,
        print_job_ids: &[i64],
        options: &RequestOptions,
    ) -> Result<Vec<Vec<PrintJobState>>> {
        self.get_set("/printjobs", print_job_ids, "/states", options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::{client_with, url, MockHttpSend};

    const STATES: &str = r#"[[
        {"printJobId":473,"state":"new","message":null,"data":null,"clientVersion":null,"createTimestamp":"2015-11-16T23:14:12.354Z","age":0},
        {"printJobId":473,"state":"sent_to_client","message":null,"data":null,"clientVersion":"4.7.1","createTimestamp":"2015-11-16T23:14:13.001Z","age":647}
    ]]"#;

    #[tokio::test]
    async fn test_get_print_job_states_flattens_first_group() {
        let mock = MockHttpSend::new().respond(200, STATES);
        let client = client_with(&mock);

        let states = client
            .get_print_job_states(473, &RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(states.len(), 2);
        assert_eq!(states[0].state, "new");
        assert_eq!(states[1].age, 647);
        assert_eq!(states[1].client_version.as_deref(), Some("4.7.1"));
        assert_eq!(mock.only_request().uri, url("/printjobs/473/states"));
    }

    #[tokio::test]
    async fn test_get_print_job_states_empty() {
        let mock = MockHttpSend::new().respond(200, "[]");
        let client = client_with(&mock);

        let states = client
            .get_print_job_states(1, &RequestOptions::default())
            .await
            .unwrap();
        assert!(states.is_empty());
    }

    #[tokio::test]
    async fn test_list_and_set_states() {
        let mock = MockHttpSend::new()
            .respond(200, STATES)
            .respond(200, r#"[[{"printJobId":1,"state":"done","age":5}],[]]"#);
        let client = client_with(&mock);

        let all = client
            .list_print_job_states(&RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 1);

        let set = client
            .get_print_job_set_states(&[1, 2], &RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set[0][0].print_job_id, 1);
        assert!(set[1].is_empty());

        let requests = mock.requests();
        assert_eq!(requests[0].uri, url("/printjobs/states"));
        assert_eq!(requests[1].uri, url("/printjobs/1,2/states"));
    }
}
