//! The self-describing OpenAPI 3.0 document served at `/api-docs`.
//!
//! Assembled by hand as plain JSON; the document is small and changes only
//! when an endpoint does. Swagger-style UI hosting is left to whoever
//! consumes the document.

use serde_json::{json, Value};

/// The complete OpenAPI document for the menagerie API.
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Menagerie API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "A simple API for messages and creatures",
        },
        "components": {
            "securitySchemes": {
                "ApiKeyAuth": {
                    "type": "apiKey",
                    "in": "header",
                    "name": "x-api-key",
                }
            },
            "schemas": {
                "Creature": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "example": 1 },
                        "name": { "type": "string", "example": "Drax" },
                        "description": { "type": "string", "example": "A dragon" },
                        "elements": {
                            "type": "array",
                            "items": { "type": "string" },
                            "example": ["fire", "ice"],
                        },
                        "image": {
                            "nullable": true,
                            "type": "object",
                            "properties": {
                                "content_type": { "type": "string", "example": "image/png" },
                                "size_bytes": { "type": "integer", "example": 2048 },
                            },
                        },
                    },
                },
                "Error": {
                    "type": "object",
                    "properties": {
                        "error": { "type": "string" },
                    },
                },
            },
        },
        "paths": {
            "/messages": {
                "get": {
                    "summary": "Retrieve a list of messages",
                    "security": [ { "ApiKeyAuth": [] } ],
                    "responses": {
                        "200": {
                            "description": "A list of messages.",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "messages": {
                                                "type": "array",
                                                "items": { "type": "string" },
                                                "example": ["First message", "Second message"],
                                            },
                                        },
                                    },
                                },
                            },
                        },
                        "401": { "description": "Missing or invalid API key." },
                    },
                },
                "post": {
                    "summary": "Post a new message",
                    "security": [ { "ApiKeyAuth": [] } ],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "message": { "type": "string", "example": "Hello!" },
                                    },
                                },
                            },
                        },
                    },
                    "responses": {
                        "200": { "description": "Message accepted; echoes the stored text." },
                        "400": { "description": "No message provided." },
                        "401": { "description": "Missing or invalid API key." },
                    },
                },
            },
            "/creatures": {
                "get": {
                    "summary": "List all creatures",
                    "responses": {
                        "200": {
                            "description": "All creatures in creation order.",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Creature" },
                                    },
                                },
                            },
                        },
                    },
                },
                "post": {
                    "summary": "Create a creature",
                    "requestBody": {
                        "content": {
                            "multipart/form-data": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "name": { "type": "string" },
                                        "description": { "type": "string" },
                                        "elements": {
                                            "type": "string",
                                            "description": "Comma-separated element labels",
                                            "example": "fire,ice",
                                        },
                                        "image": { "type": "string", "format": "binary" },
                                    },
                                },
                            },
                        },
                    },
                    "responses": {
                        "201": {
                            "description": "The created creature, including its assigned id.",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Creature" },
                                },
                            },
                        },
                    },
                },
            },
            "/creatures/{id}": {
                "put": {
                    "summary": "Update a creature's name",
                    "parameters": [
                        {
                            "name": "id",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "integer" },
                        },
                    ],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "name": { "type": "string", "example": "Draxor" },
                                    },
                                },
                            },
                        },
                    },
                    "responses": {
                        "200": { "description": "Name updated." },
                        "404": {
                            "description": "Creature not found.",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Error" },
                                },
                            },
                        },
                    },
                },
            },
            "/creatures/{id}/image": {
                "get": {
                    "summary": "Retrieve a creature's image",
                    "parameters": [
                        {
                            "name": "id",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "integer" },
                        },
                    ],
                    "responses": {
                        "200": { "description": "The raw image under its stored content type." },
                        "404": { "description": "Creature or attachment not found." },
                    },
                },
            },
        },
    })
}
