use crate::models::alteration::{Alteration, AlterationType};

///
/// A request as it arrives from a client, before it is turned into an [`Alteration`].
///
/// [`Query::query_id`] is the key caches use to memoize results.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query {
    pub id: Option<String>,
    pub hugo_symbol: Option<String>,
    pub entrez_gene_id: Option<i32>,
    pub alteration: Option<String>,
    pub alteration_type: Option<String>,
    pub tumor_type: Option<String>,
    pub consequence: Option<String>,
    pub protein_start: Option<i32>,
    pub protein_end: Option<i32>,
}

impl Query {
    pub fn new(hugo_symbol: &str, alteration: &str, tumor_type: Option<&str>) -> Self {
        Query {
            hugo_symbol: Some(hugo_symbol.to_string()),
            alteration: Some(alteration.to_string()),
            tumor_type: tumor_type.map(str::to_string),
            ..Default::default()
        }
    }

    ///
    /// `&`-joined key of the populated fields: the Entrez id (or the symbol
    /// when there is none), alteration, tumor type, consequence and positions.
    ///
    pub fn query_id(&self) -> String {
        let mut content: Vec<String> = Vec::new();
        match (self.entrez_gene_id, &self.hugo_symbol) {
            (Some(id), _) => content.push(id.to_string()),
            (None, Some(symbol)) => content.push(symbol.clone()),
            (None, None) => {}
        }
        content.extend(self.alteration.iter().cloned());
        content.extend(self.tumor_type.iter().cloned());
        content.extend(self.consequence.iter().cloned());
        content.extend(self.protein_start.map(|p| p.to_string()));
        content.extend(self.protein_end.map(|p| p.to_string()));
        content.join("&")
    }
}

impl From<&Alteration> for Query {
    fn from(alt: &Alteration) -> Self {
        let alteration_type = match alt.alteration_type {
            AlterationType::Unknown => AlterationType::Mutation,
            other => other,
        };
        Query {
            hugo_symbol: Some(alt.gene.hugo_symbol.clone()),
            entrez_gene_id: Some(alt.gene.entrez_gene_id),
            alteration: Some(alt.alteration.clone()),
            alteration_type: Some(alteration_type.to_string()),
            consequence: alt.consequence.as_ref().map(|c| c.term.clone()),
            protein_start: alt.protein_start,
            protein_end: alt.protein_end,
            ..Default::default()
        }
    }
}
