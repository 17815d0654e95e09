//! Institutional hierarchy nodes, their course associations and admins

use super::{FieldsOptions, ListOptions};
use learn_core::{Fields, RestCall, Result};
use learn_models::hierarchy::*;
use learn_models::Paged;

const NODES: &str = "/learn/api/public/v1/institutionalHierarchy/nodes";
const NODE: &str = "/learn/api/public/v1/institutionalHierarchy/nodes/{nodeId}";
const NODE_COURSE: &str = "/learn/api/public/v1/institutionalHierarchy/nodes/{nodeId}/courses/{courseId}";
const NODE_ADMIN: &str = "/learn/api/public/v1/institutionalHierarchy/nodes/{nodeId}/admins/{userId}";

learn_core::query_options! {
  /// Filters for listing nodes
  pub struct GetNodesOptions {
    offset: u32 => "offset",
    limit: u32 => "limit",
    external_id: String => "externalId",
    title: String => "title",
    fields: Fields => "fields",
  }
}

learn_core::query_options! {
  /// Options for listing a node's course associations
  pub struct GetNodeCoursesOptions {
    offset: u32 => "offset",
    limit: u32 => "limit",
    include_children: bool => "includeChildren",
    expand: String => "expand",
    fields: Fields => "fields",
  }
}

/// List hierarchy nodes
pub fn get_nodes(options: &GetNodesOptions) -> Result<RestCall<Paged<Node>>> {
  RestCall::get(NODES).options(options).build()
}

/// Create a node under `parentId`
pub fn create_node(body: &CreateNodeBody) -> Result<RestCall<Node>> {
  RestCall::post(NODES).json_body(body)?.build()
}

/// Get one node
pub fn get_node(node_id: &str, options: &FieldsOptions) -> Result<RestCall<Node>> {
  RestCall::get(NODE).path_param("nodeId", node_id).options(options).build()
}

/// Update a node
pub fn update_node(node_id: &str, body: &UpdateNodeBody) -> Result<RestCall<Node>> {
  RestCall::patch(NODE).path_param("nodeId", node_id).json_body(body)?.build()
}

/// Delete a node
pub fn delete_node(node_id: &str) -> Result<RestCall<()>> {
  RestCall::delete(NODE).path_param("nodeId", node_id).build()
}

/// List the direct children of a node
pub fn get_node_children(node_id: &str, options: &ListOptions) -> Result<RestCall<Paged<Node>>> {
  RestCall::get("/learn/api/public/v1/institutionalHierarchy/nodes/{nodeId}/children")
    .path_param("nodeId", node_id)
    .options(options)
    .build()
}

/// List the courses associated with a node
pub fn get_node_courses(
  node_id: &str,
  options: &GetNodeCoursesOptions,
) -> Result<RestCall<Paged<NodeCourseAssociation>>> {
  RestCall::get("/learn/api/public/v1/institutionalHierarchy/nodes/{nodeId}/courses")
    .path_param("nodeId", node_id)
    .options(options)
    .build()
}

/// Associate a course with a node
pub fn add_node_course(node_id: &str, course_id: &str, body: &AddNodeCourseBody) -> Result<RestCall<()>> {
  RestCall::put(NODE_COURSE)
    .path_param("nodeId", node_id)
    .path_param("courseId", course_id)
    .json_body(body)?
    .build()
}

/// Remove a course association from a node
pub fn delete_node_course(node_id: &str, course_id: &str) -> Result<RestCall<()>> {
  RestCall::delete(NODE_COURSE)
    .path_param("nodeId", node_id)
    .path_param("courseId", course_id)
    .build()
}

/// List the admins of a node
pub fn get_node_admins(node_id: &str, options: &ListOptions) -> Result<RestCall<Paged<NodeAdmin>>> {
  RestCall::get("/learn/api/public/v1/institutionalHierarchy/nodes/{nodeId}/admins")
    .path_param("nodeId", node_id)
    .options(options)
    .build()
}

/// Make a user an admin of a node with the given node roles
pub fn add_node_admin(node_id: &str, user_id: &str, body: &AddNodeAdminBody) -> Result<RestCall<()>> {
  RestCall::put(NODE_ADMIN)
    .path_param("nodeId", node_id)
    .path_param("userId", user_id)
    .json_body(body)?
    .build()
}

/// Remove a user from a node's admins
pub fn delete_node_admin(node_id: &str, user_id: &str) -> Result<RestCall<()>> {
  RestCall::delete(NODE_ADMIN)
    .path_param("nodeId", node_id)
    .path_param("userId", user_id)
    .build()
}

/// List the nodes a course is associated with
pub fn get_course_nodes(course_id: &str, options: &ListOptions) -> Result<RestCall<Paged<NodeCourseAssociation>>> {
  RestCall::get("/learn/api/public/v1/courses/{courseId}/nodes")
    .path_param("courseId", course_id)
    .options(options)
    .build()
}

/// List the nodes a user administers
pub fn get_user_admin_nodes(user_id: &str, options: &ListOptions) -> Result<RestCall<Paged<NodeAdmin>>> {
  RestCall::get("/learn/api/public/v1/users/{userId}/nodes")
    .path_param("userId", user_id)
    .options(options)
    .build()
}
