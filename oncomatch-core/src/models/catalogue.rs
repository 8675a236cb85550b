use std::sync::Arc;

use crate::models::alteration::Alteration;
use crate::models::reference_genome::ReferenceGenome;

///
/// Immutable snapshot of the curated alterations of one gene.
///
/// Cloning is cheap: the rows are shared, so a snapshot can be handed to any
/// number of concurrent resolutions while the producer builds the next one.
///
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    alterations: Arc<[Alteration]>,
}

impl Catalogue {
    pub fn new(alterations: Vec<Alteration>) -> Self {
        Catalogue {
            alterations: alterations.into(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Alteration> {
        self.alterations.iter()
    }

    ///
    /// Rows applying under `genome`, in curation order.
    ///
    pub fn valid_for(
        &self,
        genome: Option<ReferenceGenome>,
    ) -> impl Iterator<Item = &Alteration> + '_ {
        self.alterations
            .iter()
            .filter(move |alt| alt.is_valid_for(genome))
    }

    pub fn len(&self) -> usize {
        self.alterations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alterations.is_empty()
    }

    pub fn as_slice(&self) -> &[Alteration] {
        &self.alterations
    }
}

impl From<Vec<Alteration>> for Catalogue {
    fn from(alterations: Vec<Alteration>) -> Self {
        Catalogue::new(alterations)
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a Alteration;
    type IntoIter = std::slice::Iter<'a, Alteration>;

    fn into_iter(self) -> Self::IntoIter {
        self.alterations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::gene::Gene;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_valid_for_filters_by_genome() {
        let gene = Gene::new(673, "BRAF");
        let catalogue = Catalogue::new(vec![
            Alteration::new(gene.clone(), "V600E").with_genomes([ReferenceGenome::GRCh37]),
            Alteration::new(gene.clone(), "V600K").with_genomes([ReferenceGenome::GRCh38]),
            Alteration::new(gene, "Oncogenic Mutations"),
        ]);

        let names: Vec<&str> = catalogue
            .valid_for(Some(ReferenceGenome::GRCh38))
            .map(|alt| alt.alteration.as_str())
            .collect();
        assert_eq!(names, vec!["V600K", "Oncogenic Mutations"]);
        assert_eq!(catalogue.valid_for(None).count(), 3);
    }

    #[rstest]
    fn test_clone_shares_rows() {
        let catalogue = Catalogue::new(vec![Alteration::new(Gene::new(1, "A"), "X1Y")]);
        let copy = catalogue.clone();
        assert_eq!(
            std::ptr::eq(catalogue.as_slice().as_ptr(), copy.as_slice().as_ptr()),
            true
        );
    }
}
