use dioxus::prelude::*;

use common::job_listing::JobSearchQuery;
use crate::components::navbar::Navbar;

use crate::data_definitions::url_param::UrlParam;
use crate::pages::home_page::HomePage;
use crate::pages::jobs_page::JobsPage;
use crate::pages::manage_jobs_page::ManageJobsPage;
use crate::pages::employer_profile_page::EmployerProfilePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/jobs/:query/:current_page")]
    JobsPage {
        query: UrlParam<JobSearchQuery>,
        current_page: u64,
    },


    #[route("/employer/:employer_id/jobs")]
    ManageJobsPage { employer_id: String },

    #[route("/employer/:employer_id/profile")]
    EmployerProfilePage { employer_id: String },

}

impl Route {
    pub fn jobs_page_from_query(q: JobSearchQuery) -> Self {
        Self::JobsPage {
            query: UrlParam::from(q),
            current_page: 0_u64,
        }
    }

    /// Employer the current route belongs to, if any.
    pub fn employer_id(&self) -> Option<String> {
        match self {
            Self::ManageJobsPage { employer_id } | Self::EmployerProfilePage { employer_id } => Some(employer_id.clone()),
            _ => None,
        }
    }
}
