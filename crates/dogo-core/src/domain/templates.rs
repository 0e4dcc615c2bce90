//! Boilerplate source templates and the context used to fill them.
//!
//! Templates use `{{VARIABLE}}` placeholders. Unknown placeholders are left
//! untouched, so Go's own braces never need escaping.

use std::collections::HashMap;

use crate::domain::value_objects::{ServiceKind, ServiceName};

/// Entry point written to `dogo/<service>/main.go`.
pub const ENTRY_POINT_TEMPLATE: &str = r#"package main

import (
	"log"
	"{{SERVICE_NAME}}/internal/router"
	"github.com/gin-gonic/gin"
)

func main() {
	log.Println("Starting {{SERVICE_NAME}} service...")

	r := gin.Default()

	router.SetupRoutes(r)

	if err := r.Run(":8080"); err != nil {
		log.Fatalf("failed to start server: %v", err)
	}
}
"#;

/// Health-check route written to `internal/router/routes.go`.
pub const ROUTES_TEMPLATE: &str = r#"package router

import "github.com/gin-gonic/gin"

func SetupRoutes(r *gin.Engine) {
	r.GET("/health", func(c *gin.Context) {
		c.JSON(200, gin.H{"status": "OK"})
	})
}
"#;

/// Variables available to templates.
///
/// | Variable       | Example  |
/// |----------------|----------|
/// | `SERVICE_NAME` | `orders` |
/// | `SERVICE_KIND` | `rest`   |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<&'static str, String>,
}

impl RenderContext {
    pub fn new(name: &ServiceName, kind: ServiceKind) -> Self {
        let mut variables = HashMap::new();
        variables.insert("SERVICE_NAME", name.as_str().to_string());
        variables.insert("SERVICE_KIND", kind.as_str().to_string());
        Self { variables }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{KEY}}` with its value.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}
