//! Photos attached to a violation ticket

use super::guard;
use super::value_objects::{DocumentId, PhotoDescription};
use hearth_authorization::{require, CaseVisa};
use hearth_core::{EntityId, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoProps {
    id: EntityId,
    document_id: String,
    description: String,
}

impl PhotoProps {
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Blob storage document holding the image
    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug)]
pub struct Photo<'a> {
    props: &'a mut PhotoProps,
    visa: CaseVisa,
}

impl<'a> Photo<'a> {
    pub(crate) fn new(props: &'a mut PhotoProps, visa: CaseVisa) -> Self {
        Self { props, visa }
    }

    pub(crate) fn get_new_instance(document_id: &str, description: &str) -> Result<PhotoProps> {
        let document_id = DocumentId::try_new(document_id)?;
        let description = PhotoDescription::try_new(description)?;
        Ok(PhotoProps {
            id: EntityId::generate(),
            document_id: document_id.into(),
            description: description.into(),
        })
    }

    pub fn props(&self) -> &PhotoProps {
        self.props
    }

    pub fn set_description(&mut self, raw: &str) -> Result<()> {
        require(self.visa.as_ref(), "photo.set_description", guard::participate)?;
        let description = PhotoDescription::try_new(raw)?;
        self.props.description = description.into();
        Ok(())
    }
}
