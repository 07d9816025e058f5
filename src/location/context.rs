use super::lenient;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// A snapshot of the content and user being edited, used to decide which
/// field groups attach.
///
/// Deserializes from camelCase keys (`postType`, `userRole`, ...) and also
/// accepts the snake_case location parameter names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationContext {
    #[serde(alias = "post_type")]
    pub post_type: Option<String>,
    #[serde(alias = "post_status")]
    pub post_status: Option<String>,
    #[serde(alias = "post_format")]
    pub post_format: Option<String>,
    #[serde(alias = "pageTemplate", alias = "page_template")]
    pub template: Option<String>,
    #[serde(alias = "page_type")]
    pub page_type: Option<String>,
    #[serde(alias = "page_parent", deserialize_with = "lenient::optional_string")]
    pub page_parent: Option<String>,
    #[serde(alias = "post_category")]
    pub categories: Vec<String>,
    /// The taxonomy whose term is being edited, if any.
    pub taxonomy: Option<String>,
    /// Terms assigned to the content, keyed by taxonomy name.
    #[serde(alias = "post_taxonomy")]
    pub taxonomies: BTreeMap<String, Vec<String>>,
    #[serde(alias = "user_role", alias = "currentUserRole", alias = "current_user_role")]
    pub user_role: Option<String>,
    #[serde(alias = "user_roles")]
    pub user_roles: Vec<String>,
    #[serde(
        alias = "user_id",
        alias = "currentUser",
        alias = "current_user",
        deserialize_with = "lenient::optional_string"
    )]
    pub user_id: Option<String>,
}

impl LocationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_post_type(mut self, post_type: impl Into<String>) -> Self {
        self.post_type = Some(post_type.into());
        self
    }

    pub fn with_post_status(mut self, status: impl Into<String>) -> Self {
        self.post_status = Some(status.into());
        self
    }

    pub fn with_post_format(mut self, format: impl Into<String>) -> Self {
        self.post_format = Some(format.into());
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_page_type(mut self, page_type: impl Into<String>) -> Self {
        self.page_type = Some(page_type.into());
        self
    }

    pub fn with_page_parent(mut self, parent: impl Into<String>) -> Self {
        self.page_parent = Some(parent.into());
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_taxonomy(mut self, taxonomy: impl Into<String>) -> Self {
        self.taxonomy = Some(taxonomy.into());
        self
    }

    pub fn with_terms<I, S>(mut self, taxonomy: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.taxonomies
            .insert(taxonomy.into(), terms.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_user_role(mut self, role: impl Into<String>) -> Self {
        self.user_role = Some(role.into());
        self
    }

    pub fn with_user_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// The value a location parameter compares against in this context.
    pub fn resolve(&self, param: LocationParam) -> ContextValue<'_> {
        match param {
            LocationParam::PostType => scalar(&self.post_type),
            LocationParam::PostStatus => scalar(&self.post_status),
            LocationParam::PostFormat => scalar(&self.post_format),
            LocationParam::PageTemplate | LocationParam::PostTemplate => scalar(&self.template),
            LocationParam::PageType => scalar(&self.page_type),
            LocationParam::PageParent => scalar(&self.page_parent),
            LocationParam::Taxonomy => scalar(&self.taxonomy),
            LocationParam::CurrentUser => scalar(&self.user_id),
            LocationParam::PostCategory => ContextValue::List(
                self.categories
                    .iter()
                    .map(|category| Cow::Borrowed(category.as_str()))
                    .collect(),
            ),
            LocationParam::PostTaxonomy => ContextValue::List(self.taxonomy_terms()),
            LocationParam::UserRole | LocationParam::CurrentUserRole => ContextValue::List(
                self.user_role
                    .iter()
                    .chain(self.user_roles.iter())
                    .map(|role| Cow::Borrowed(role.as_str()))
                    .collect(),
            ),
        }
    }

    /// Assigned terms as `taxonomy:term`. Categories count as terms of the
    /// `category` taxonomy.
    fn taxonomy_terms(&self) -> Vec<Cow<'_, str>> {
        let categories = self
            .categories
            .iter()
            .map(|category| Cow::Owned(format!("category:{}", category)));
        let terms = self.taxonomies.iter().flat_map(|(taxonomy, terms)| {
            terms
                .iter()
                .map(move |term| Cow::Owned(format!("{}:{}", taxonomy, term)))
        });
        categories.chain(terms).collect()
    }
}

fn scalar(value: &Option<String>) -> ContextValue<'_> {
    ContextValue::Scalar(value.as_deref().unwrap_or_default())
}

/// A resolved context value: a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextValue<'a> {
    Scalar(&'a str),
    List(Vec<Cow<'a, str>>),
}

/// The closed set of context parameters a location rule can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationParam {
    PostType,
    PostStatus,
    PostFormat,
    PostCategory,
    PostTaxonomy,
    Taxonomy,
    PageTemplate,
    PostTemplate,
    PageType,
    PageParent,
    UserRole,
    CurrentUserRole,
    CurrentUser,
}

impl LocationParam {
    pub fn parse(raw: &str) -> Option<Self> {
        let param = match raw.trim() {
            "post_type" => LocationParam::PostType,
            "post_status" => LocationParam::PostStatus,
            "post_format" => LocationParam::PostFormat,
            "post_category" => LocationParam::PostCategory,
            "post_taxonomy" => LocationParam::PostTaxonomy,
            "taxonomy" => LocationParam::Taxonomy,
            "page_template" => LocationParam::PageTemplate,
            "post_template" => LocationParam::PostTemplate,
            "page_type" => LocationParam::PageType,
            "page_parent" => LocationParam::PageParent,
            "user_role" => LocationParam::UserRole,
            "current_user_role" => LocationParam::CurrentUserRole,
            "current_user" => LocationParam::CurrentUser,
            _ => return None,
        };
        Some(param)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LocationParam::PostType => "post_type",
            LocationParam::PostStatus => "post_status",
            LocationParam::PostFormat => "post_format",
            LocationParam::PostCategory => "post_category",
            LocationParam::PostTaxonomy => "post_taxonomy",
            LocationParam::Taxonomy => "taxonomy",
            LocationParam::PageTemplate => "page_template",
            LocationParam::PostTemplate => "post_template",
            LocationParam::PageType => "page_type",
            LocationParam::PageParent => "page_parent",
            LocationParam::UserRole => "user_role",
            LocationParam::CurrentUserRole => "current_user_role",
            LocationParam::CurrentUser => "current_user",
        }
    }
}
