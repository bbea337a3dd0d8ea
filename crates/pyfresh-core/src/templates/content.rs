//! File bodies for the built-in templates.
//!
//! Everything here is static data consumed through the template descriptors
//! in [`super::registry`]. Bodies are placeholder-token templates; the
//! renderer owns the token set.

pub(super) const GITIGNORE: &str = "__pycache__/
*.pyc
*.pyo
*.pyd
.Python
env/
pip-log.txt
pip-delete-this-directory.txt
.tox
.coverage
.coverage.*
.cache
nosetests.xml
coverage.xml
*.cover
*.log
.git
.mypy_cache
.pytest_cache
.hypothesis

.DS_Store
.vscode/
.idea/

.env
.venv/
venv/
ENV/

dist/
build/
*.egg-info/
*.egg

.pdm-python
.pdm-build/
";

pub(super) const README: &str = "# {{project_name}}

{{description}}

## Installation

```bash
{{install_command}}
```

## Usage

```bash
{{run_command}}
```

## Development

```bash
# Install dependencies
{{install_command}}

# Run tests
make test

# Format code
make lint
```

## License

MIT License
";

pub(super) const MAKEFILE_POETRY: &str = "install:
\tpoetry install

lint:
\tpoetry run black src tests
\tpoetry run mypy src

test:
\tpoetry run pytest

clean:
\tfind . -type f -name \"*.pyc\" -delete
\tfind . -type d -name \"__pycache__\" -delete

.PHONY: install lint test clean
";

pub(super) const MAKEFILE_UV: &str = "install:
\tuv sync

lint:
\tuv run black src tests
\tuv run mypy src

test:
\tuv run pytest

clean:
\tfind . -type f -name \"*.pyc\" -delete
\tfind . -type d -name \"__pycache__\" -delete

.PHONY: install lint test clean
";

pub(super) const MAIN_PY: &str = r#"def main():
    """Main entry point."""
    print("Hello from main!")


if __name__ == "__main__":
    main()
"#;

pub(super) const CLI_PY: &str = r#"import click


@click.command()
@click.option('--name', default='World', help='Name to greet.')
def main(name):
    """Simple CLI application."""
    click.echo(f'Hello {name}!')


if __name__ == '__main__':
    main()
"#;

pub(super) const APP_PY: &str = r#"from fastapi import FastAPI

app = FastAPI()


@app.get("/")
async def root():
    return {"message": "Hello World"}


@app.get("/health")
async def health():
    return {"status": "healthy"}


if __name__ == "__main__":
    import uvicorn
    uvicorn.run(app, host="0.0.0.0", port=8000)
"#;

pub(super) const TEST_MAIN_PY: &str = r#"from {{package_name}}.main import main


def test_main(capsys):
    """Test main function."""
    main()
    captured = capsys.readouterr()
    assert "Hello" in captured.out
"#;

pub(super) const TEST_CLI_PY: &str = r#"from {{package_name}}.cli import main


def test_main():
    """Test CLI main function."""
    from click.testing import CliRunner
    runner = CliRunner()
    result = runner.invoke(main, ['--name', 'Test'])
    assert result.exit_code == 0
    assert 'Hello Test!' in result.output
"#;

pub(super) const TEST_APP_PY: &str = r#"from {{package_name}}.app import app


def test_root():
    """Test web app root endpoint."""
    from fastapi.testclient import TestClient
    client = TestClient(app)
    response = client.get("/")
    assert response.status_code == 200
    assert response.json() == {"message": "Hello World"}
"#;

pub(super) const PYPROJECT_POETRY: &str = r#"[tool.poetry]
name = "{{package_name}}"
version = "0.1.0"
description = "{{description}}"
authors = ["{{author_name}} <{{author_email}}>"]
readme = "README.md"
packages = [{include = "{{package_name}}", from = "src"}]

[tool.poetry.dependencies]
python = "{{python_version}}"
{{dependencies}}

[tool.poetry.group.dev.dependencies]
{{dev_dependencies}}

[build-system]
requires = ["poetry-core>=1.0.0"]
build-backend = "poetry.core.masonry.api"

[tool.black]
line-length = 88
target-version = ['py311']

[tool.mypy]
python_version = "3.11"
warn_return_any = true
warn_unused_configs = true
"#;

pub(super) const PYPROJECT_UV: &str = r#"[project]
name = "{{package_name}}"
version = "0.1.0"
description = "{{description}}"
authors = [
    {name = "{{author_name}}", email = "{{author_email}}"}
]
readme = "README.md"
requires-python = "{{python_version}}"
dependencies = [
{{dependencies}}
]

[project.optional-dependencies]
dev = [
{{dev_dependencies}}
]

[build-system]
requires = ["hatchling"]
build-backend = "hatchling.build"

[tool.uv]
dev-dependencies = [
{{dev_dependencies}}
]

[tool.black]
line-length = 88
target-version = ['py311']

[tool.mypy]
python_version = "3.11"
warn_return_any = true
warn_unused_configs = true
"#;
