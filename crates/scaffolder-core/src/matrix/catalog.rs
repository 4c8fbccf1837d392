//! Literal file bodies keyed by language and framework
//!
//! Adding a framework means adding a registry entry in `matrix` and a row in
//! `ENTRY_POINTS` here; `resolve` does not change.

use super::{Framework, Language};

/// Per-language file layout
pub(super) struct LanguageLayout {
    pub entry_path: &'static str,
    /// Used when no entry point is registered for the framework
    pub fallback_entry: &'static str,
    pub manifest_path: &'static str,
    pub manifest: fn(Framework) -> String,
    /// Placeholder files added for layered complexity tiers
    pub layers: &'static [(&'static str, &'static str)],
}

static GO_LAYOUT: LanguageLayout = LanguageLayout {
    entry_path: "main.go",
    fallback_entry: GO_HELLO,
    manifest_path: "go.mod",
    manifest: go_mod,
    layers: &[
        ("internal/repository/repo.go", "package repository"),
        ("internal/service/service.go", "package service"),
    ],
};

static JS_LAYOUT: LanguageLayout = LanguageLayout {
    entry_path: "index.js",
    fallback_entry: JS_HELLO,
    manifest_path: "package.json",
    manifest: package_json,
    layers: &[],
};

static PYTHON_LAYOUT: LanguageLayout = LanguageLayout {
    entry_path: "app.py",
    fallback_entry: PYTHON_HELLO,
    manifest_path: "requirements.txt",
    manifest: requirements_txt,
    layers: &[],
};

pub(super) fn layout(language: Language) -> &'static LanguageLayout {
    match language {
        Language::Go => &GO_LAYOUT,
        Language::JavaScript => &JS_LAYOUT,
        Language::Python => &PYTHON_LAYOUT,
    }
}

/// Entry point body for a (language, framework) pair, if one is registered
pub(super) fn entry_point(language: Language, framework: Framework) -> Option<&'static str> {
    ENTRY_POINTS
        .iter()
        .find(|(lang, fw, _)| *lang == language && *fw == framework)
        .map(|(_, _, body)| *body)
}

fn go_mod(_framework: Framework) -> String {
    "module app\n\ngo 1.21".to_string()
}

fn package_json(_framework: Framework) -> String {
    r#"{"name": "app", "version": "1.0.0", "scripts": {"start": "node index.js"}}"#.to_string()
}

fn requirements_txt(framework: Framework) -> String {
    framework.display_name().to_string()
}

const ENTRY_POINTS: &[(Language, Framework, &str)] = &[
    (Language::Go, Framework::Gin, GIN_MAIN),
    (Language::Go, Framework::Echo, ECHO_MAIN),
    (Language::Go, Framework::Fiber, FIBER_MAIN),
    (Language::JavaScript, Framework::Express, EXPRESS_INDEX),
    (Language::JavaScript, Framework::Fastify, FASTIFY_INDEX),
    (Language::Python, Framework::Flask, FLASK_APP),
    (Language::Python, Framework::FastApi, FASTAPI_APP),
    (Language::Python, Framework::Django, DJANGO_MANAGE),
];

const GIN_MAIN: &str = r#"package main

import "github.com/gin-gonic/gin"

func main() {
	r := gin.Default()
	r.GET("/ping", func(c *gin.Context) {
		c.JSON(200, gin.H{"message": "pong"})
	})
	r.Run() // listen and serve on 0.0.0.0:8080
}"#;

const ECHO_MAIN: &str = r#"package main

import (
	"net/http"
	"github.com/labstack/echo/v4"
)

func main() {
	e := echo.New()
	e.GET("/", func(c echo.Context) error {
		return c.String(http.StatusOK, "Hello, World!")
	})
	e.Logger.Fatal(e.Start(":1323"))
}"#;

const FIBER_MAIN: &str = r#"package main

import "github.com/gofiber/fiber/v2"

func main() {
    app := fiber.New()
    app.Get("/", func(c *fiber.Context) error {
        return c.SendString("Hello, Fiber!")
    })
    app.Listen(":3000")
}"#;

const GO_HELLO: &str = r#"package main

import "fmt"

func main() {
	fmt.Println("Hello, Go!")
}"#;

const EXPRESS_INDEX: &str = r#"const express = require('express')
const app = express()
const port = 3000

app.get('/', (req, res) => {
  res.send('Hello Express!')
})

app.listen(port, () => {
  console.log(`Example app listening on port ${port}`)
})"#;

const FASTIFY_INDEX: &str = r#"const fastify = require('fastify')({ logger: true })

fastify.get('/', async (request, reply) => {
  return { hello: 'world' }
})

const start = async () => {
  try {
    await fastify.listen({ port: 3000 })
  } catch (err) {
    fastify.log.error(err)
    process.exit(1)
  }
}
start()"#;

const JS_HELLO: &str = r#"console.log('Hello, JavaScript!')"#;

const FLASK_APP: &str = r#"from flask import Flask
app = Flask(__name__)

@app.route('/')
def hello_world():
    return 'Hello, Flask!'

if __name__ == '__main__':
    app.run()"#;

const FASTAPI_APP: &str = r#"from fastapi import FastAPI

app = FastAPI()

@app.get("/")
async def root():
    return {"message": "Hello FastAPI"}
"#;

const DJANGO_MANAGE: &str = r#"# Django project entry point
import os
import sys

def main():
    os.environ.setdefault('DJANGO_SETTINGS_MODULE', 'app.settings')
    try:
        from django.core.management import execute_from_command_line
    except ImportError as exc:
        raise ImportError("Couldn't import Django.") from exc
    execute_from_command_line(sys.argv)

if __name__ == '__main__':
    main()"#;

const PYTHON_HELLO: &str = r#"print('Hello, Python!')"#;
