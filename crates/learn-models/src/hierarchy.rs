//! Institutional hierarchy nodes and their course/admin associations

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
  pub id: String,
  pub external_id: Option<String>,
  pub title: Option<String>,
  pub description: Option<String>,
  /// Absent on the root node
  pub parent_id: Option<String>,
}

/// A course attached to a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeCourseAssociation {
  pub node_id: Option<String>,
  pub course_id: Option<String>,
  /// The node used for reporting when a course sits under several nodes
  pub is_primary: Option<bool>,
  pub node: Option<Node>,
}

/// A user administering a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeAdmin {
  pub node_id: Option<String>,
  pub user_id: Option<String>,
  #[serde(default)]
  pub node_roles: Vec<String>,
  pub node: Option<Node>,
}

request_body! {
  pub struct CreateNodeBody {
    external_id: String,
    title: String,
    description: String,
    parent_id: String,
  }
}

request_body! {
  pub struct UpdateNodeBody {
    external_id: String,
    title: String,
    description: String,
    parent_id: String,
  }
}

request_body! {
  /// Body of `PUT .../nodes/{nodeId}/courses/{courseId}`
  pub struct AddNodeCourseBody {
    is_primary: bool,
  }
}

request_body! {
  /// Body of `PUT .../nodes/{nodeId}/admins/{userId}`
  pub struct AddNodeAdminBody {
    node_roles: Vec<String>,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_admin_body() {
    let body = AddNodeAdminBody::new().node_roles(vec!["NodeAdmin".to_string()]);
    assert_eq!(serde_json::to_value(&body).unwrap(), json!({"nodeRoles": ["NodeAdmin"]}));
  }

  #[test]
  fn test_node_without_parent() {
    let node: Node = serde_json::from_value(json!({"id": "_1_1", "title": "Institution"})).unwrap();
    assert!(node.parent_id.is_none());
  }
}
