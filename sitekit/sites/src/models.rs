// This code was automatically generated by sitekit-gen. Do not edit manually.

//! Entity, complex and enum types exchanged with the service.

use serde::{Deserialize, Serialize};
use sitekit::{AdditionalData, AdditionalDataHolder, discriminator_value};

/// Base type of every addressable entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl Entity {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.entity".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for Entity {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Common properties of sites, lists, list items, drives and drive items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseItem {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentitySet>,
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "eTag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    #[serde(rename = "lastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<IdentitySet>,
    #[serde(rename = "lastModifiedDateTime", skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "parentReference", skip_serializing_if = "Option::is_none")]
    pub parent_reference: Option<ItemReference>,
    #[serde(rename = "webUrl", skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    #[serde(rename = "createdByUser", skip_serializing_if = "Option::is_none")]
    pub created_by_user: Option<Box<User>>,
    #[serde(rename = "lastModifiedByUser", skip_serializing_if = "Option::is_none")]
    pub last_modified_by_user: Option<Box<User>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl BaseItem {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.baseItem".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for BaseItem {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A SharePoint site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Site {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentitySet>,
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "eTag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    #[serde(rename = "lastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<IdentitySet>,
    #[serde(rename = "lastModifiedDateTime", skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "parentReference", skip_serializing_if = "Option::is_none")]
    pub parent_reference: Option<ItemReference>,
    #[serde(rename = "webUrl", skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    #[serde(rename = "createdByUser", skip_serializing_if = "Option::is_none")]
    pub created_by_user: Option<Box<User>>,
    #[serde(rename = "lastModifiedByUser", skip_serializing_if = "Option::is_none")]
    pub last_modified_by_user: Option<Box<User>>,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "isPersonalSite", skip_serializing_if = "Option::is_none")]
    pub is_personal_site: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<Root>,
    #[serde(rename = "sharepointIds", skip_serializing_if = "Option::is_none")]
    pub sharepoint_ids: Option<SharepointIds>,
    #[serde(rename = "siteCollection", skip_serializing_if = "Option::is_none")]
    pub site_collection: Option<SiteCollection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Box<ItemAnalytics>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ColumnDefinition>>,
    #[serde(rename = "contentTypes", skip_serializing_if = "Option::is_none")]
    pub content_types: Option<Vec<ContentType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive: Option<Box<Drive>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drives: Option<Vec<Drive>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lists: Option<Vec<List>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onenote: Option<Box<Onenote>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<AnyBaseSitePage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<Permission>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sites: Option<Vec<Site>>,
    #[serde(rename = "termStore", skip_serializing_if = "Option::is_none")]
    pub term_store: Option<Box<Store>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl Site {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.site".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for Site {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A SharePoint list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct List {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentitySet>,
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "eTag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    #[serde(rename = "lastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<IdentitySet>,
    #[serde(rename = "lastModifiedDateTime", skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "parentReference", skip_serializing_if = "Option::is_none")]
    pub parent_reference: Option<ItemReference>,
    #[serde(rename = "webUrl", skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    #[serde(rename = "createdByUser", skip_serializing_if = "Option::is_none")]
    pub created_by_user: Option<Box<User>>,
    #[serde(rename = "lastModifiedByUser", skip_serializing_if = "Option::is_none")]
    pub last_modified_by_user: Option<Box<User>>,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<ListInfo>,
    #[serde(rename = "sharepointIds", skip_serializing_if = "Option::is_none")]
    pub sharepoint_ids: Option<SharepointIds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ColumnDefinition>>,
    #[serde(rename = "contentTypes", skip_serializing_if = "Option::is_none")]
    pub content_types: Option<Vec<ContentType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive: Option<Box<Drive>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ListItem>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl List {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.list".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for List {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// An item in a SharePoint list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentitySet>,
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "eTag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    #[serde(rename = "lastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<IdentitySet>,
    #[serde(rename = "lastModifiedDateTime", skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "parentReference", skip_serializing_if = "Option::is_none")]
    pub parent_reference: Option<ItemReference>,
    #[serde(rename = "webUrl", skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    #[serde(rename = "createdByUser", skip_serializing_if = "Option::is_none")]
    pub created_by_user: Option<Box<User>>,
    #[serde(rename = "lastModifiedByUser", skip_serializing_if = "Option::is_none")]
    pub last_modified_by_user: Option<Box<User>>,
    #[serde(rename = "contentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentTypeInfo>,
    #[serde(rename = "sharepointIds", skip_serializing_if = "Option::is_none")]
    pub sharepoint_ids: Option<SharepointIds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Box<ItemAnalytics>>,
    #[serde(rename = "driveItem", skip_serializing_if = "Option::is_none")]
    pub drive_item: Option<Box<DriveItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Box<FieldValueSet>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl ListItem {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.listItem".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for ListItem {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Column values of a list item, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldValueSet {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl FieldValueSet {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.fieldValueSet".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for FieldValueSet {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl From<Entity> for FieldValueSet {
    fn from(value: Entity) -> Self {
        Self {
            odata_type: value.odata_type,
            id: value.id,
            additional_data: value.additional_data,
        }
    }
}

/// A document library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drive {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentitySet>,
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "eTag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    #[serde(rename = "lastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<IdentitySet>,
    #[serde(rename = "lastModifiedDateTime", skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "parentReference", skip_serializing_if = "Option::is_none")]
    pub parent_reference: Option<ItemReference>,
    #[serde(rename = "webUrl", skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    #[serde(rename = "createdByUser", skip_serializing_if = "Option::is_none")]
    pub created_by_user: Option<Box<User>>,
    #[serde(rename = "lastModifiedByUser", skip_serializing_if = "Option::is_none")]
    pub last_modified_by_user: Option<Box<User>>,
    #[serde(rename = "driveType", skip_serializing_if = "Option::is_none")]
    pub drive_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<IdentitySet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota: Option<Quota>,
    #[serde(rename = "sharePointIds", skip_serializing_if = "Option::is_none")]
    pub share_point_ids: Option<SharepointIds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<DriveItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Box<List>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<Box<DriveItem>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl Drive {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.drive".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for Drive {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A file, folder or other item stored in a drive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriveItem {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentitySet>,
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "eTag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    #[serde(rename = "lastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<IdentitySet>,
    #[serde(rename = "lastModifiedDateTime", skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "parentReference", skip_serializing_if = "Option::is_none")]
    pub parent_reference: Option<ItemReference>,
    #[serde(rename = "webUrl", skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    #[serde(rename = "createdByUser", skip_serializing_if = "Option::is_none")]
    pub created_by_user: Option<Box<User>>,
    #[serde(rename = "lastModifiedByUser", skip_serializing_if = "Option::is_none")]
    pub last_modified_by_user: Option<Box<User>>,
    #[serde(rename = "cTag", skip_serializing_if = "Option::is_none")]
    pub c_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<File>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<Folder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<Root>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(rename = "sharepointIds", skip_serializing_if = "Option::is_none")]
    pub sharepoint_ids: Option<SharepointIds>,
    #[serde(rename = "webDavUrl", skip_serializing_if = "Option::is_none")]
    pub web_dav_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Box<ItemAnalytics>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DriveItem>>,
    #[serde(rename = "listItem", skip_serializing_if = "Option::is_none")]
    pub list_item: Option<Box<ListItem>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl DriveItem {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.driveItem".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for DriveItem {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A directory object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryObject {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "deletedDateTime", skip_serializing_if = "Option::is_none")]
    pub deleted_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl DirectoryObject {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.directoryObject".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for DirectoryObject {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A user account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "deletedDateTime", skip_serializing_if = "Option::is_none")]
    pub deleted_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(rename = "accountEnabled", skip_serializing_if = "Option::is_none")]
    pub account_enabled: Option<bool>,
    #[serde(rename = "businessPhones", skip_serializing_if = "Option::is_none")]
    pub business_phones: Option<Vec<String>>,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "givenName", skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(rename = "jobTitle", skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(rename = "userPrincipalName", skip_serializing_if = "Option::is_none")]
    pub user_principal_name: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl User {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.user".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for User {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Access statistics for an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemAnalytics {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "allTime", skip_serializing_if = "Option::is_none")]
    pub all_time: Option<Box<ItemActivityStat>>,
    #[serde(rename = "itemActivityStats", skip_serializing_if = "Option::is_none")]
    pub item_activity_stats: Option<Vec<ItemActivityStat>>,
    #[serde(rename = "lastSevenDays", skip_serializing_if = "Option::is_none")]
    pub last_seven_days: Option<Box<ItemActivityStat>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl ItemAnalytics {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.itemAnalytics".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for ItemAnalytics {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Activity on an item within an interval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemActivityStat {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<ItemActionStat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create: Option<ItemActionStat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<ItemActionStat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit: Option<ItemActionStat>,
    #[serde(rename = "endDateTime", skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(rename = "incompleteData", skip_serializing_if = "Option::is_none")]
    pub incomplete_data: Option<IncompleteData>,
    #[serde(rename = "isTrending", skip_serializing_if = "Option::is_none")]
    pub is_trending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#move: Option<ItemActionStat>,
    #[serde(rename = "startDateTime", skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl ItemActivityStat {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.itemActivityStat".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for ItemActivityStat {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A column in a site, list or content type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "columnGroup", skip_serializing_if = "Option::is_none")]
    pub column_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "enforceUniqueValues", skip_serializing_if = "Option::is_none")]
    pub enforce_unique_values: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
    #[serde(rename = "isDeletable", skip_serializing_if = "Option::is_none")]
    pub is_deletable: Option<bool>,
    #[serde(rename = "isReorderable", skip_serializing_if = "Option::is_none")]
    pub is_reorderable: Option<bool>,
    #[serde(rename = "isSealed", skip_serializing_if = "Option::is_none")]
    pub is_sealed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<NumberColumn>,
    #[serde(rename = "readOnly", skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ColumnTypes>,
    #[serde(rename = "sourceColumn", skip_serializing_if = "Option::is_none")]
    pub source_column: Option<Box<ColumnDefinition>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl ColumnDefinition {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.columnDefinition".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for ColumnDefinition {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A content type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentType {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "associatedHubsUrls", skip_serializing_if = "Option::is_none")]
    pub associated_hubs_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(rename = "isBuiltIn", skip_serializing_if = "Option::is_none")]
    pub is_built_in: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<ContentTypeOrder>,
    #[serde(rename = "parentId", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(rename = "propagateChanges", skip_serializing_if = "Option::is_none")]
    pub propagate_changes: Option<bool>,
    #[serde(rename = "readOnly", skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sealed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<Box<ContentType>>,
    #[serde(rename = "baseTypes", skip_serializing_if = "Option::is_none")]
    pub base_types: Option<Vec<ContentType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ColumnDefinition>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl ContentType {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.contentType".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for ContentType {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A sharing permission granted for a site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "expirationDateTime", skip_serializing_if = "Option::is_none")]
    pub expiration_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(rename = "grantedToIdentitiesV2", skip_serializing_if = "Option::is_none")]
    pub granted_to_identities_v2: Option<Vec<IdentitySet>>,
    #[serde(rename = "grantedToV2", skip_serializing_if = "Option::is_none")]
    pub granted_to_v2: Option<IdentitySet>,
    #[serde(rename = "hasPassword", skip_serializing_if = "Option::is_none")]
    pub has_password: Option<bool>,
    #[serde(rename = "inheritedFrom", skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<ItemReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<SharingLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(rename = "shareId", skip_serializing_if = "Option::is_none")]
    pub share_id: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl Permission {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.permission".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for Permission {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The OneNote service entry point of a site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Onenote {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebooks: Option<Vec<Notebook>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<OnenotePage>>,
    #[serde(rename = "sectionGroups", skip_serializing_if = "Option::is_none")]
    pub section_groups: Option<Vec<SectionGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<OnenoteSection>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl Onenote {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.onenote".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for Onenote {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `OnenoteEntityBaseModel` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnenoteEntityBaseModel {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl OnenoteEntityBaseModel {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.onenoteEntityBaseModel".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for OnenoteEntityBaseModel {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `OnenoteEntitySchemaObjectModel` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnenoteEntitySchemaObjectModel {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl OnenoteEntitySchemaObjectModel {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.onenoteEntitySchemaObjectModel".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for OnenoteEntitySchemaObjectModel {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `OnenoteEntityHierarchyModel` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnenoteEntityHierarchyModel {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentitySet>,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "lastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<IdentitySet>,
    #[serde(rename = "lastModifiedDateTime", skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl OnenoteEntityHierarchyModel {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.onenoteEntityHierarchyModel".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for OnenoteEntityHierarchyModel {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A OneNote notebook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentitySet>,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "lastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<IdentitySet>,
    #[serde(rename = "lastModifiedDateTime", skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(rename = "isDefault", skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(rename = "isShared", skip_serializing_if = "Option::is_none")]
    pub is_shared: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<NotebookLinks>,
    #[serde(rename = "sectionGroupsUrl", skip_serializing_if = "Option::is_none")]
    pub section_groups_url: Option<String>,
    #[serde(rename = "sectionsUrl", skip_serializing_if = "Option::is_none")]
    pub sections_url: Option<String>,
    #[serde(rename = "userRole", skip_serializing_if = "Option::is_none")]
    pub user_role: Option<OnenoteUserRole>,
    #[serde(rename = "sectionGroups", skip_serializing_if = "Option::is_none")]
    pub section_groups: Option<Vec<SectionGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<OnenoteSection>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl Notebook {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.notebook".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for Notebook {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A group of OneNote sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionGroup {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentitySet>,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "lastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<IdentitySet>,
    #[serde(rename = "lastModifiedDateTime", skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(rename = "sectionGroupsUrl", skip_serializing_if = "Option::is_none")]
    pub section_groups_url: Option<String>,
    #[serde(rename = "sectionsUrl", skip_serializing_if = "Option::is_none")]
    pub sections_url: Option<String>,
    #[serde(rename = "parentNotebook", skip_serializing_if = "Option::is_none")]
    pub parent_notebook: Option<Box<Notebook>>,
    #[serde(rename = "parentSectionGroup", skip_serializing_if = "Option::is_none")]
    pub parent_section_group: Option<Box<SectionGroup>>,
    #[serde(rename = "sectionGroups", skip_serializing_if = "Option::is_none")]
    pub section_groups: Option<Vec<SectionGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<OnenoteSection>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl SectionGroup {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.sectionGroup".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for SectionGroup {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A section in a OneNote notebook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnenoteSection {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentitySet>,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "lastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<IdentitySet>,
    #[serde(rename = "lastModifiedDateTime", skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(rename = "isDefault", skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<SectionLinks>,
    #[serde(rename = "pagesUrl", skip_serializing_if = "Option::is_none")]
    pub pages_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<OnenotePage>>,
    #[serde(rename = "parentNotebook", skip_serializing_if = "Option::is_none")]
    pub parent_notebook: Option<Box<Notebook>>,
    #[serde(rename = "parentSectionGroup", skip_serializing_if = "Option::is_none")]
    pub parent_section_group: Option<Box<SectionGroup>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl OnenoteSection {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.onenoteSection".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for OnenoteSection {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A page in a OneNote section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnenotePage {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(rename = "contentUrl", skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    #[serde(rename = "createdByAppId", skip_serializing_if = "Option::is_none")]
    pub created_by_app_id: Option<String>,
    #[serde(rename = "lastModifiedDateTime", skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<PageLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "userTags", skip_serializing_if = "Option::is_none")]
    pub user_tags: Option<Vec<String>>,
    #[serde(rename = "parentNotebook", skip_serializing_if = "Option::is_none")]
    pub parent_notebook: Option<Box<Notebook>>,
    #[serde(rename = "parentSection", skip_serializing_if = "Option::is_none")]
    pub parent_section: Option<Box<OnenoteSection>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl OnenotePage {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.onenotePage".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for OnenotePage {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A page in the site page library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseSitePage {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentitySet>,
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "eTag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    #[serde(rename = "lastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<IdentitySet>,
    #[serde(rename = "lastModifiedDateTime", skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "parentReference", skip_serializing_if = "Option::is_none")]
    pub parent_reference: Option<ItemReference>,
    #[serde(rename = "webUrl", skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    #[serde(rename = "createdByUser", skip_serializing_if = "Option::is_none")]
    pub created_by_user: Option<Box<User>>,
    #[serde(rename = "lastModifiedByUser", skip_serializing_if = "Option::is_none")]
    pub last_modified_by_user: Option<Box<User>>,
    #[serde(rename = "pageLayout", skip_serializing_if = "Option::is_none")]
    pub page_layout: Option<PageLayoutType>,
    #[serde(rename = "publishingState", skip_serializing_if = "Option::is_none")]
    pub publishing_state: Option<PublicationFacet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl BaseSitePage {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.baseSitePage".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for BaseSitePage {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A modern SharePoint page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SitePage {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentitySet>,
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "eTag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,
    #[serde(rename = "lastModifiedBy", skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<IdentitySet>,
    #[serde(rename = "lastModifiedDateTime", skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "parentReference", skip_serializing_if = "Option::is_none")]
    pub parent_reference: Option<ItemReference>,
    #[serde(rename = "webUrl", skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    #[serde(rename = "createdByUser", skip_serializing_if = "Option::is_none")]
    pub created_by_user: Option<Box<User>>,
    #[serde(rename = "lastModifiedByUser", skip_serializing_if = "Option::is_none")]
    pub last_modified_by_user: Option<Box<User>>,
    #[serde(rename = "pageLayout", skip_serializing_if = "Option::is_none")]
    pub page_layout: Option<PageLayoutType>,
    #[serde(rename = "publishingState", skip_serializing_if = "Option::is_none")]
    pub publishing_state: Option<PublicationFacet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "promotionKind", skip_serializing_if = "Option::is_none")]
    pub promotion_kind: Option<PagePromotionType>,
    #[serde(rename = "showComments", skip_serializing_if = "Option::is_none")]
    pub show_comments: Option<bool>,
    #[serde(rename = "showRecommendedPages", skip_serializing_if = "Option::is_none")]
    pub show_recommended_pages: Option<bool>,
    #[serde(rename = "thumbnailWebUrl", skip_serializing_if = "Option::is_none")]
    pub thumbnail_web_url: Option<String>,
    #[serde(rename = "canvasLayout", skip_serializing_if = "Option::is_none")]
    pub canvas_layout: Option<Box<CanvasLayout>>,
    #[serde(rename = "webParts", skip_serializing_if = "Option::is_none")]
    pub web_parts: Option<Vec<AnyWebPart>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl SitePage {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.sitePage".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for SitePage {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The layout of a site page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasLayout {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "horizontalSections", skip_serializing_if = "Option::is_none")]
    pub horizontal_sections: Option<Vec<HorizontalSection>>,
    #[serde(rename = "verticalSection", skip_serializing_if = "Option::is_none")]
    pub vertical_section: Option<Box<VerticalSection>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl CanvasLayout {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.canvasLayout".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for CanvasLayout {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A horizontal section of a page canvas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HorizontalSection {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<SectionEmphasisType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<HorizontalSectionLayoutType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<HorizontalSectionColumn>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl HorizontalSection {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.horizontalSection".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for HorizontalSection {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A column of a horizontal section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HorizontalSectionColumn {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webparts: Option<Vec<AnyWebPart>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl HorizontalSectionColumn {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.horizontalSectionColumn".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for HorizontalSectionColumn {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The vertical section of a page canvas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerticalSection {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<SectionEmphasisType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webparts: Option<Vec<AnyWebPart>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl VerticalSection {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.verticalSection".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for VerticalSection {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A component placed on a page canvas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebPart {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl WebPart {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.webPart".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for WebPart {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl From<Entity> for WebPart {
    fn from(value: Entity) -> Self {
        Self {
            odata_type: value.odata_type,
            id: value.id,
            additional_data: value.additional_data,
        }
    }
}

/// A web part holding formatted text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextWebPart {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "innerHtml", skip_serializing_if = "Option::is_none")]
    pub inner_html: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl TextWebPart {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.textWebPart".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for TextWebPart {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A web part with typed data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardWebPart {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "containerTextWebPartId", skip_serializing_if = "Option::is_none")]
    pub container_text_web_part_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<WebPartData>,
    #[serde(rename = "webPartType", skip_serializing_if = "Option::is_none")]
    pub web_part_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl StandardWebPart {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.standardWebPart".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for StandardWebPart {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The taxonomy term store of a site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "defaultLanguageTag", skip_serializing_if = "Option::is_none")]
    pub default_language_tag: Option<String>,
    #[serde(rename = "languageTags", skip_serializing_if = "Option::is_none")]
    pub language_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Group>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<Vec<Set>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl Store {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.termStore.store".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for Store {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A group of term sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "parentSiteId", skip_serializing_if = "Option::is_none")]
    pub parent_site_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<TermGroupScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<Vec<Set>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl Group {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.termStore.group".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for Group {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A set of terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Set {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "localizedNames", skip_serializing_if = "Option::is_none")]
    pub localized_names: Option<Vec<LocalizedName>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<KeyValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Term>>,
    #[serde(rename = "parentGroup", skip_serializing_if = "Option::is_none")]
    pub parent_group: Option<Box<Group>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relations: Option<Vec<Relation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<Term>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl Set {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.termStore.set".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for Set {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A taxonomy term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Term {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<Vec<LocalizedDescription>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<LocalizedLabel>>,
    #[serde(rename = "lastModifiedDateTime", skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<KeyValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Term>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relations: Option<Vec<Relation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set: Option<Box<Set>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl Term {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.termStore.term".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for Term {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A pin or reuse relation between terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<RelationType>,
    #[serde(rename = "fromTerm", skip_serializing_if = "Option::is_none")]
    pub from_term: Option<Box<Term>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set: Option<Box<Set>>,
    #[serde(rename = "toTerm", skip_serializing_if = "Option::is_none")]
    pub to_term: Option<Box<Term>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl Relation {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.termStore.relation".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for Relation {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The identities of an actor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentitySet {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<Identity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Identity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Identity>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl IdentitySet {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.identitySet".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for IdentitySet {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A user, device or application identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl Identity {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.identity".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for Identity {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Information needed to address an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemReference {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "driveId", skip_serializing_if = "Option::is_none")]
    pub drive_id: Option<String>,
    #[serde(rename = "driveType", skip_serializing_if = "Option::is_none")]
    pub drive_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "shareId", skip_serializing_if = "Option::is_none")]
    pub share_id: Option<String>,
    #[serde(rename = "sharepointIds", skip_serializing_if = "Option::is_none")]
    pub sharepoint_ids: Option<SharepointIds>,
    #[serde(rename = "siteId", skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl ItemReference {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.itemReference".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for ItemReference {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// SharePoint REST identifiers of an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharepointIds {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "listId", skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(rename = "listItemId", skip_serializing_if = "Option::is_none")]
    pub list_item_id: Option<String>,
    #[serde(rename = "listItemUniqueId", skip_serializing_if = "Option::is_none")]
    pub list_item_unique_id: Option<String>,
    #[serde(rename = "siteId", skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    #[serde(rename = "siteUrl", skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    #[serde(rename = "tenantId", skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(rename = "webId", skip_serializing_if = "Option::is_none")]
    pub web_id: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl SharepointIds {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.sharepointIds".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for SharepointIds {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Marks the root of a site collection or drive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Root {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl Root {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.root".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for Root {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Details of a site collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteCollection {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "dataLocationCode", skip_serializing_if = "Option::is_none")]
    pub data_location_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<Root>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl SiteCollection {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.siteCollection".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for SiteCollection {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Additional list information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListInfo {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "contentTypesEnabled", skip_serializing_if = "Option::is_none")]
    pub content_types_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl ListInfo {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.listInfo".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for ListInfo {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The content type of a list item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeInfo {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl ContentTypeInfo {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.contentTypeInfo".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for ContentTypeInfo {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Storage quota of a drive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quota {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used: Option<i64>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl Quota {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.quota".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for Quota {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// File metadata of a drive item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct File {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "mimeType", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(rename = "processingMetadata", skip_serializing_if = "Option::is_none")]
    pub processing_metadata: Option<bool>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl File {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.file".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for File {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Folder metadata of a drive item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "childCount", skip_serializing_if = "Option::is_none")]
    pub child_count: Option<i32>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl Folder {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.folder".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for Folder {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Counts for one kind of action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemActionStat {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "actionCount", skip_serializing_if = "Option::is_none")]
    pub action_count: Option<i32>,
    #[serde(rename = "actorCount", skip_serializing_if = "Option::is_none")]
    pub actor_count: Option<i32>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl ItemActionStat {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.itemActionStat".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for ItemActionStat {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Marks statistics computed from incomplete data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncompleteData {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "missingDataBeforeDateTime", skip_serializing_if = "Option::is_none")]
    pub missing_data_before_date_time: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(rename = "wasThrottled", skip_serializing_if = "Option::is_none")]
    pub was_throttled: Option<bool>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl IncompleteData {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.incompleteData".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for IncompleteData {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Settings of a text column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextColumn {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "allowMultipleLines", skip_serializing_if = "Option::is_none")]
    pub allow_multiple_lines: Option<bool>,
    #[serde(rename = "appendChangesToExistingText", skip_serializing_if = "Option::is_none")]
    pub append_changes_to_existing_text: Option<bool>,
    #[serde(rename = "linesForEditing", skip_serializing_if = "Option::is_none")]
    pub lines_for_editing: Option<i32>,
    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i32>,
    #[serde(rename = "textType", skip_serializing_if = "Option::is_none")]
    pub text_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl TextColumn {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.textColumn".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for TextColumn {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Settings of a number column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberColumn {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "decimalPlaces", skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<String>,
    #[serde(rename = "displayAs", skip_serializing_if = "Option::is_none")]
    pub display_as: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl NumberColumn {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.numberColumn".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for NumberColumn {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Position of a content type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeOrder {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl ContentTypeOrder {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.contentTypeOrder".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for ContentTypeOrder {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A sharing link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharingLink {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<Identity>,
    #[serde(rename = "preventsDownload", skip_serializing_if = "Option::is_none")]
    pub prevents_download: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(rename = "webHtml", skip_serializing_if = "Option::is_none")]
    pub web_html: Option<String>,
    #[serde(rename = "webUrl", skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl SharingLink {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.sharingLink".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for SharingLink {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A link to open a OneNote resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalLink {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl ExternalLink {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.externalLink".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for ExternalLink {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Links for opening a notebook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotebookLinks {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "oneNoteClientUrl", skip_serializing_if = "Option::is_none")]
    pub one_note_client_url: Option<ExternalLink>,
    #[serde(rename = "oneNoteWebUrl", skip_serializing_if = "Option::is_none")]
    pub one_note_web_url: Option<ExternalLink>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl NotebookLinks {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.notebookLinks".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for NotebookLinks {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Links for opening a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionLinks {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "oneNoteClientUrl", skip_serializing_if = "Option::is_none")]
    pub one_note_client_url: Option<ExternalLink>,
    #[serde(rename = "oneNoteWebUrl", skip_serializing_if = "Option::is_none")]
    pub one_note_web_url: Option<ExternalLink>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl SectionLinks {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.sectionLinks".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for SectionLinks {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Links for opening a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "oneNoteClientUrl", skip_serializing_if = "Option::is_none")]
    pub one_note_client_url: Option<ExternalLink>,
    #[serde(rename = "oneNoteWebUrl", skip_serializing_if = "Option::is_none")]
    pub one_note_web_url: Option<ExternalLink>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl PageLinks {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.pageLinks".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for PageLinks {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Publishing state of a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationFacet {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "checkedOutBy", skip_serializing_if = "Option::is_none")]
    pub checked_out_by: Option<IdentitySet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(rename = "versionId", skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl PublicationFacet {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.publicationFacet".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for PublicationFacet {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Data of a standard web part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebPartData {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "dataVersion", skip_serializing_if = "Option::is_none")]
    pub data_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
    #[serde(rename = "serverProcessedContent", skip_serializing_if = "Option::is_none")]
    pub server_processed_content: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl WebPartData {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.webPartData".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for WebPartData {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A localized name of a term set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedName {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "languageTag", skip_serializing_if = "Option::is_none")]
    pub language_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl LocalizedName {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.termStore.localizedName".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for LocalizedName {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A key-value pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyValue {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl KeyValue {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.keyValue".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for KeyValue {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A localized description of a term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedDescription {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "languageTag", skip_serializing_if = "Option::is_none")]
    pub language_tag: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl LocalizedDescription {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.termStore.localizedDescription".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for LocalizedDescription {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A localized label of a term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedLabel {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "isDefault", skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(rename = "languageTag", skip_serializing_if = "Option::is_none")]
    pub language_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl LocalizedLabel {
    /// Creates an empty value carrying its `@odata.type` discriminator.
    pub fn new() -> Self {
        Self {
            odata_type: Some("#microsoft.graph.termStore.localizedLabel".to_string()),
            ..Self::default()
        }
    }
}

impl AdditionalDataHolder for LocalizedLabel {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A page of a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseCollectionPaginationCountResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl BaseCollectionPaginationCountResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for BaseCollectionPaginationCountResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `SiteCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<Site>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl SiteCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for SiteCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `ItemActivityStatCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemActivityStatCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<ItemActivityStat>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl ItemActivityStatCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for ItemActivityStatCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `ColumnDefinitionCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinitionCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<ColumnDefinition>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl ColumnDefinitionCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for ColumnDefinitionCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `ContentTypeCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<ContentType>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl ContentTypeCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for ContentTypeCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `ListCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<List>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl ListCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for ListCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `ListItemCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItemCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<ListItem>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl ListItemCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for ListItemCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `NotebookCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotebookCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<Notebook>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl NotebookCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for NotebookCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `OnenoteSectionCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnenoteSectionCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<OnenoteSection>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl OnenoteSectionCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for OnenoteSectionCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `SectionGroupCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionGroupCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<SectionGroup>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl SectionGroupCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for SectionGroupCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `OnenotePageCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnenotePageCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<OnenotePage>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl OnenotePageCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for OnenotePageCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `BaseSitePageCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseSitePageCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<AnyBaseSitePage>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl BaseSitePageCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for BaseSitePageCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `HorizontalSectionCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HorizontalSectionCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<HorizontalSection>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl HorizontalSectionCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for HorizontalSectionCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `HorizontalSectionColumnCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HorizontalSectionColumnCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<HorizontalSectionColumn>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl HorizontalSectionColumnCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for HorizontalSectionColumnCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `WebPartCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebPartCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<AnyWebPart>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl WebPartCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for WebPartCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `PermissionCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<Permission>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl PermissionCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for PermissionCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `GroupCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<Group>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl GroupCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for GroupCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `SetCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<Set>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl SetCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for SetCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `TermCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<Term>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl TermCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for TermCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `RelationCollectionResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationCollectionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<Relation>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl RelationCollectionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for RelationCollectionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A page of a delta query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseDeltaFunctionResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.deltaLink", skip_serializing_if = "Option::is_none")]
    pub odata_delta_link: Option<String>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl BaseDeltaFunctionResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for BaseDeltaFunctionResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `DeltaGetResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaGetResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.deltaLink", skip_serializing_if = "Option::is_none")]
    pub odata_delta_link: Option<String>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<Site>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl DeltaGetResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for DeltaGetResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// Deprecated alias of `DeltaGetResponse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.deltaLink", skip_serializing_if = "Option::is_none")]
    pub odata_delta_link: Option<String>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<Site>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl DeltaResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for DeltaResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl From<DeltaGetResponse> for DeltaResponse {
    fn from(value: DeltaGetResponse) -> Self {
        Self {
            odata_type: value.odata_type,
            odata_delta_link: value.odata_delta_link,
            odata_next_link: value.odata_next_link,
            value: value.value,
            additional_data: value.additional_data,
        }
    }
}

/// The `AddPostRequestBody` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddPostRequestBody {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<Site>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl AddPostRequestBody {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for AddPostRequestBody {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `AddPostResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddPostResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<Site>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl AddPostResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for AddPostResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `RemovePostRequestBody` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemovePostRequestBody {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<Site>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl RemovePostRequestBody {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for RemovePostRequestBody {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `RemovePostResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemovePostResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<Site>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl RemovePostResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for RemovePostResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `GetCompatibleHubContentTypesGetResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetCompatibleHubContentTypesGetResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<ContentType>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl GetCompatibleHubContentTypesGetResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for GetCompatibleHubContentTypesGetResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// The `GetActivitiesByIntervalGetResponse` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetActivitiesByIntervalGetResponse {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<ItemActivityStat>>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl GetActivitiesByIntervalGetResponse {
    /// Creates an empty value.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdditionalDataHolder for GetActivitiesByIntervalGetResponse {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

/// A `BaseSitePage` or one of its derived types, selected by `@odata.type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyBaseSitePage {
    SitePage(SitePage),
    BaseSitePage(BaseSitePage),
}

impl AnyBaseSitePage {
    /// The `@odata.type` discriminator of the wrapped value.
    pub fn odata_type(&self) -> Option<&str> {
        match self {
            Self::SitePage(value) => value.odata_type.as_deref(),
            Self::BaseSitePage(value) => value.odata_type.as_deref(),
        }
    }
}

impl<'de> Deserialize<'de> for AnyBaseSitePage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let discriminator = discriminator_value(&value).map(str::to_owned);
        let decoded = match discriminator.as_deref() {
            Some("#microsoft.graph.sitePage") => serde_json::from_value(value).map(Self::SitePage),
            _ => serde_json::from_value(value).map(Self::BaseSitePage),
        };
        decoded.map_err(serde::de::Error::custom)
    }
}

impl From<SitePage> for AnyBaseSitePage {
    fn from(value: SitePage) -> Self {
        Self::SitePage(value)
    }
}

impl From<BaseSitePage> for AnyBaseSitePage {
    fn from(value: BaseSitePage) -> Self {
        Self::BaseSitePage(value)
    }
}

/// A `WebPart` or one of its derived types, selected by `@odata.type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyWebPart {
    TextWebPart(TextWebPart),
    StandardWebPart(StandardWebPart),
    WebPart(WebPart),
}

impl AnyWebPart {
    /// The `@odata.type` discriminator of the wrapped value.
    pub fn odata_type(&self) -> Option<&str> {
        match self {
            Self::TextWebPart(value) => value.odata_type.as_deref(),
            Self::StandardWebPart(value) => value.odata_type.as_deref(),
            Self::WebPart(value) => value.odata_type.as_deref(),
        }
    }
}

impl<'de> Deserialize<'de> for AnyWebPart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let discriminator = discriminator_value(&value).map(str::to_owned);
        let decoded = match discriminator.as_deref() {
            Some("#microsoft.graph.textWebPart") => serde_json::from_value(value).map(Self::TextWebPart),
            Some("#microsoft.graph.standardWebPart") => serde_json::from_value(value).map(Self::StandardWebPart),
            _ => serde_json::from_value(value).map(Self::WebPart),
        };
        decoded.map_err(serde::de::Error::custom)
    }
}

impl From<TextWebPart> for AnyWebPart {
    fn from(value: TextWebPart) -> Self {
        Self::TextWebPart(value)
    }
}

impl From<StandardWebPart> for AnyWebPart {
    fn from(value: StandardWebPart) -> Self {
        Self::StandardWebPart(value)
    }
}

impl From<WebPart> for AnyWebPart {
    fn from(value: WebPart) -> Self {
        Self::WebPart(value)
    }
}

/// The type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnTypes {
    #[serde(rename = "note")]
    Note,
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "choice")]
    Choice,
    #[serde(rename = "multichoice")]
    Multichoice,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "currency")]
    Currency,
    #[serde(rename = "dateTime")]
    DateTime,
    #[serde(rename = "lookup")]
    Lookup,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "user")]
    User,
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "calculated")]
    Calculated,
    #[serde(rename = "location")]
    Location,
    #[serde(rename = "geolocation")]
    Geolocation,
    #[serde(rename = "term")]
    Term,
    #[serde(rename = "multiterm")]
    Multiterm,
    #[serde(rename = "thumbnail")]
    Thumbnail,
    #[serde(rename = "approvalStatus")]
    ApprovalStatus,
    #[serde(rename = "unknownFutureValue")]
    #[serde(other)]
    UnknownFutureValue,
}

/// The current user's role on a notebook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OnenoteUserRole {
    None,
    Owner,
    Contributor,
    Reader,
    #[serde(rename = "unknownFutureValue")]
    #[serde(other)]
    UnknownFutureValue,
}

/// The layout of a site page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageLayoutType {
    #[serde(rename = "microsoftReserved")]
    MicrosoftReserved,
    #[serde(rename = "article")]
    Article,
    #[serde(rename = "home")]
    Home,
    #[serde(rename = "unknownFutureValue")]
    #[serde(other)]
    UnknownFutureValue,
}

/// How a page is promoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PagePromotionType {
    #[serde(rename = "microsoftReserved")]
    MicrosoftReserved,
    #[serde(rename = "page")]
    Page,
    #[serde(rename = "newsPost")]
    NewsPost,
    #[serde(rename = "unknownFutureValue")]
    #[serde(other)]
    UnknownFutureValue,
}

/// Background emphasis of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionEmphasisType {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "soft")]
    Soft,
    #[serde(rename = "strong")]
    Strong,
    #[serde(rename = "unknownFutureValue")]
    #[serde(other)]
    UnknownFutureValue,
}

/// Column layout of a horizontal section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizontalSectionLayoutType {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "oneColumn")]
    OneColumn,
    #[serde(rename = "twoColumns")]
    TwoColumns,
    #[serde(rename = "threeColumns")]
    ThreeColumns,
    #[serde(rename = "oneThirdLeftColumn")]
    OneThirdLeftColumn,
    #[serde(rename = "oneThirdRightColumn")]
    OneThirdRightColumn,
    #[serde(rename = "fullWidth")]
    FullWidth,
    #[serde(rename = "unknownFutureValue")]
    #[serde(other)]
    UnknownFutureValue,
}

/// Visibility of a term group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermGroupScope {
    #[serde(rename = "global")]
    Global,
    #[serde(rename = "system")]
    System,
    #[serde(rename = "siteCollection")]
    SiteCollection,
    #[serde(rename = "unknownFutureValue")]
    #[serde(other)]
    UnknownFutureValue,
}

/// Kind of a term relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationType {
    #[serde(rename = "pin")]
    Pin,
    #[serde(rename = "reuse")]
    Reuse,
    #[serde(rename = "unknownFutureValue")]
    #[serde(other)]
    UnknownFutureValue,
}
