//! Clinical trials from ClinicalTrials.gov (API v2)

use super::http::{get_json, join};
use crate::{FeedError, FeedSource};
use async_trait::async_trait;
use gotham_domain::{TrialDetail, TrialSummary};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StudiesPage {
    #[serde(default)]
    studies: Vec<Study>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Study {
    protocol_section: ProtocolSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ProtocolSection {
    identification_module: Identification,
    status_module: Status,
    design_module: Design,
    conditions_module: Conditions,
    description_module: Description,
    sponsor_collaborators_module: Sponsors,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Identification {
    nct_id: String,
    brief_title: String,
    official_title: Option<String>,
    organization: Option<Named>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Status {
    overall_status: String,
    start_date_struct: Option<DateStruct>,
    completion_date_struct: Option<DateStruct>,
}

#[derive(Debug, Default, Deserialize)]
struct DateStruct {
    #[serde(default)]
    date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Design {
    study_type: Option<String>,
    phases: Vec<String>,
    enrollment_info: Option<Enrollment>,
    design_info: Option<DesignInfo>,
}

#[derive(Debug, Default, Deserialize)]
struct Enrollment {
    #[serde(default)]
    count: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DesignInfo {
    #[serde(default)]
    primary_purpose: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Conditions {
    conditions: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Description {
    brief_summary: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Sponsors {
    lead_sponsor: Option<Named>,
    collaborators: Vec<Named>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Named {
    #[serde(alias = "fullName")]
    name: String,
}

impl ProtocolSection {
    fn into_summary(self) -> TrialSummary {
        TrialSummary {
            nct_id: self.identification_module.nct_id,
            title: self.identification_module.brief_title,
            status: self.status_module.overall_status,
            conditions: self.conditions_module.conditions,
        }
    }

    fn into_detail(self) -> TrialDetail {
        let id = self.identification_module;
        let status = self.status_module;
        let design = self.design_module;
        let sponsors = self.sponsor_collaborators_module;
        TrialDetail {
            nct_id: id.nct_id,
            brief_title: id.brief_title,
            official_title: id.official_title,
            organization: id.organization.map(|o| o.name),
            status: status.overall_status,
            start_date: status.start_date_struct.and_then(|d| d.date),
            completion_date: status.completion_date_struct.and_then(|d| d.date),
            study_type: design.study_type,
            phases: design.phases,
            enrollment: design.enrollment_info.and_then(|e| e.count),
            primary_purpose: design.design_info.and_then(|d| d.primary_purpose),
            conditions: self.conditions_module.conditions,
            summary: self.description_module.brief_summary,
            lead_sponsor: sponsors.lead_sponsor.map(|s| s.name),
            collaborators: sponsors.collaborators.into_iter().map(|c| c.name).collect(),
        }
    }
}

/// Whether `id` looks like a registry id ("NCT" and eight digits)
pub fn is_valid_nct_id(id: &str) -> bool {
    id.strip_prefix("NCT")
        .is_some_and(|digits| digits.len() == 8 && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// On-demand ClinicalTrials.gov lookups
#[derive(Clone)]
pub struct ClinicalTrialsClient {
    client: reqwest::Client,
    base_url: String,
}

impl ClinicalTrialsClient {
    /// Create a client against the given API root
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Search trials by free-text term
    pub async fn search(&self, term: &str, page_size: usize) -> Result<Vec<TrialSummary>, FeedError> {
        let page_size = page_size.to_string();
        let request = self
            .client
            .get(join(&self.base_url, "api/v2/studies"))
            .query(&[("query.term", term), ("pageSize", page_size.as_str())]);

        let page: StudiesPage = get_json(request).await?;
        Ok(page
            .studies
            .into_iter()
            .map(|s| s.protocol_section.into_summary())
            .collect())
    }

    /// Fetch one trial; `None` when the registry does not know the id
    pub async fn detail(&self, nct_id: &str) -> Result<Option<TrialDetail>, FeedError> {
        if !is_valid_nct_id(nct_id) {
            return Ok(None);
        }
        let request = self
            .client
            .get(join(&self.base_url, &format!("api/v2/studies/{}", nct_id)));

        match get_json::<Study>(request).await {
            Ok(study) => Ok(Some(study.protocol_section.into_detail())),
            Err(FeedError::Status(404)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Clinical trials widget source
pub struct TrialsSource {
    client: ClinicalTrialsClient,
    term: String,
    page_size: usize,
}

impl TrialsSource {
    /// Create a source listing trials for a fixed search term
    pub fn new(client: ClinicalTrialsClient, term: impl Into<String>, page_size: usize) -> Self {
        Self {
            client,
            term: term.into(),
            page_size,
        }
    }
}

#[async_trait]
impl FeedSource for TrialsSource {
    type Output = Vec<TrialSummary>;

    fn name(&self) -> &'static str {
        "trials"
    }

    async fn fetch(&self) -> Result<Vec<TrialSummary>, FeedError> {
        self.client.search(&self.term, self.page_size).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn study() -> Value {
        json!({
            "protocolSection": {
                "identificationModule": {
                    "nctId": "NCT01234567",
                    "briefTitle": "Night Training Study",
                    "officialTitle": "Effects of Nocturnal Exercise",
                    "organization": {"fullName": "Gotham General"}
                },
                "statusModule": {
                    "overallStatus": "RECRUITING",
                    "startDateStruct": {"date": "2024-01"},
                    "completionDateStruct": {"date": "2026-06", "type": "ESTIMATED"}
                },
                "designModule": {
                    "studyType": "INTERVENTIONAL",
                    "phases": ["PHASE2"],
                    "enrollmentInfo": {"count": 120},
                    "designInfo": {"primaryPurpose": "PREVENTION"}
                },
                "conditionsModule": {"conditions": ["Obesity", "Sleep"]},
                "descriptionModule": {"briefSummary": "Does training at night help?"},
                "sponsorCollaboratorsModule": {
                    "leadSponsor": {"name": "Wayne Foundation"},
                    "collaborators": [{"name": "Arkham Research"}]
                }
            }
        })
    }

    fn client(server: &MockServer) -> ClinicalTrialsClient {
        ClinicalTrialsClient::new(reqwest::Client::new(), server.uri())
    }

    #[test]
    fn test_nct_id_validation() {
        assert!(is_valid_nct_id("NCT01234567"));
        assert!(!is_valid_nct_id("NCT0123"));
        assert!(!is_valid_nct_id("nct01234567"));
        assert!(!is_valid_nct_id("NCT0123456x"));
        assert!(!is_valid_nct_id("../secret"));
    }

    #[tokio::test]
    async fn test_search_lists_summaries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/studies"))
            .and(query_param("query.term", "exercise"))
            .and(query_param("pageSize", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"studies": [study()]})))
            .mount(&server)
            .await;

        let trials = TrialsSource::new(client(&server), "exercise", 5)
            .fetch()
            .await
            .unwrap();
        assert_eq!(trials.len(), 1);
        assert_eq!(trials[0].nct_id, "NCT01234567");
        assert_eq!(trials[0].status, "RECRUITING");
        assert_eq!(trials[0].conditions, vec!["Obesity", "Sleep"]);
    }

    #[tokio::test]
    async fn test_detail_reads_all_modules() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/studies/NCT01234567"))
            .respond_with(ResponseTemplate::new(200).set_body_json(study()))
            .mount(&server)
            .await;

        let detail = client(&server).detail("NCT01234567").await.unwrap().unwrap();
        assert_eq!(detail.organization.as_deref(), Some("Gotham General"));
        assert_eq!(detail.completion_date.as_deref(), Some("2026-06"));
        assert_eq!(detail.phases, vec!["PHASE2"]);
        assert_eq!(detail.enrollment, Some(120));
        assert_eq!(detail.primary_purpose.as_deref(), Some("PREVENTION"));
        assert_eq!(detail.lead_sponsor.as_deref(), Some("Wayne Foundation"));
        assert_eq!(detail.collaborators, vec!["Arkham Research"]);
    }

    #[tokio::test]
    async fn test_detail_not_found_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        assert_eq!(client(&server).detail("NCT99999999").await.unwrap(), None);
        assert_eq!(client(&server).detail("not-an-id").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_detail_server_error_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(client(&server).detail("NCT01234567").await.is_err());
    }
}
