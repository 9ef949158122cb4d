//! File contents momo writes into new projects and components.
//!
//! Pure functions from parameters to JSON values or text. The services decide
//! where each one lands.

use serde_json::{Value, json};

use crate::domain::config::MomoConfig;
use crate::domain::flavor::Flavor;
use crate::domain::package_manager::PackageManager;

/// Directory of the shared TypeScript presets, relative to the project root.
pub const CONFIG_TS_DIR: &str = "packages/config-typescript";

pub const PNPM_WORKSPACE: &str = "packages:\n  - \"apps/*\"\n  - \"packages/*\"\n";

pub const GITIGNORE: &str = "\
# Dependencies
node_modules
.pnpm-store

# Next.js
.next
out

# Production
build
dist

# Misc
.DS_Store
*.pem

# Debug
npm-debug.log*
yarn-debug.log*
yarn-error.log*
.pnpm-debug.log*

# Env settings
.env
.env.local
.env.development.local
.env.test.local
.env.production.local

# Turbo
.turbo
";

/// Top-level `package.json`.
///
/// Non-pnpm managers declare members through `workspaces`; pnpm reads
/// `pnpm-workspace.yaml` instead.
pub fn root_package_json(
    name: &str,
    manager: PackageManager,
    manager_version: &str,
    momo_version: &str,
) -> Value {
    let mut manifest = json!({
        "name": name,
        "private": true,
        "license": "MIT",
        "scripts": {
            "build": "turbo build",
            "dev": "turbo dev",
            "lint": "turbo lint",
            "clean": "turbo clean",
            "format": "biome format . --write",
            "check": "biome check .",
            "type-check": "turbo type-check"
        },
        "dependencies": {},
        "devDependencies": {
            "create-momo": format!("^{momo_version}"),
            "turbo": "latest",
            "typescript": "latest",
            "@biomejs/biome": "latest"
        },
        "engines": {
            "node": ">=18"
        }
    });

    if let Some(object) = manifest.as_object_mut() {
        if manager != PackageManager::Pnpm {
            object.insert("workspaces".into(), json!(["apps/*", "packages/*"]));
        }
        object.insert(
            "packageManager".into(),
            json!(format!("{manager}@{manager_version}")),
        );
    }
    manifest
}

pub fn turbo_json() -> Value {
    json!({
        "$schema": "https://turbo.build/schema.json",
        "tasks": {
            "build": {
                "dependsOn": ["^build"],
                "inputs": ["$TURBO_DEFAULT$", ".env*"],
                "outputs": [".next/**", "!.next/cache/**", "dist/**"]
            },
            "lint": {
                "dependsOn": ["^lint"]
            },
            "dev": {
                "cache": false,
                "persistent": true
            },
            "type-check": {
                "dependsOn": ["^type-check"]
            }
        }
    })
}

pub fn root_tsconfig() -> Value {
    json!({
        "compilerOptions": {
            "target": "ES2022",
            "lib": ["DOM", "DOM.Iterable", "ESNext"],
            "module": "ESNext",
            "skipLibCheck": true,
            "moduleResolution": "bundler",
            "allowImportingTsExtensions": true,
            "resolveJsonModule": true,
            "isolatedModules": true,
            "noEmit": true,
            "jsx": "react-jsx",
            "strict": true,
            "noUnusedLocals": true,
            "noUnusedParameters": true,
            "noFallthroughCasesInSwitch": true,
            "allowSyntheticDefaultImports": true,
            "forceConsistentCasingInFileNames": true
        },
        "exclude": ["node_modules", "dist"]
    })
}

/// `momo.config.json` for a new project.
pub fn project_config(scope: &str, manager: PackageManager) -> Value {
    serde_json::to_value(MomoConfig::for_project(scope, manager))
        .unwrap_or_else(|_| json!({ "scope": scope, "manager": manager.as_str() }))
}

/// Manifest of the shared `config-typescript` package.
pub fn config_ts_package_json(scope: &str) -> Value {
    json!({
        "name": format!("{scope}/config-typescript"),
        "version": "0.0.0",
        "private": true,
        "license": "MIT",
        "files": ["*.json"]
    })
}

/// Preset content for a flavor. `base` is the root every other preset extends.
pub fn flavor_tsconfig(flavor: Flavor) -> Value {
    match flavor {
        Flavor::Base => json!({
            "$schema": "https://json.schemastore.org/tsconfig",
            "display": "Default",
            "compilerOptions": {
                "target": "ES2022",
                "lib": ["ES2022"],
                "module": "ESNext",
                "moduleResolution": "bundler",
                "strict": true,
                "esModuleInterop": true,
                "skipLibCheck": true,
                "forceConsistentCasingInFileNames": true,
                "declaration": true,
                "declarationMap": true,
                "isolatedModules": true,
                "resolveJsonModule": true
            },
            "exclude": ["node_modules"]
        }),
        Flavor::Nextjs => json!({
            "extends": "./base.json",
            "display": "Next.js",
            "compilerOptions": {
                "lib": ["dom", "dom.iterable", "esnext"],
                "module": "esnext",
                "moduleResolution": "bundler",
                "noEmit": true,
                "resolveJsonModule": true,
                "jsx": "preserve",
                "plugins": [{ "name": "next" }]
            }
        }),
        Flavor::React => json!({
            "extends": "./base.json",
            "display": "React",
            "compilerOptions": {
                "lib": ["dom", "dom.iterable", "esnext"],
                "module": "esnext",
                "moduleResolution": "bundler",
                "jsx": "react-jsx"
            }
        }),
        Flavor::Node => json!({
            "extends": "./base.json",
            "display": "Node.js",
            "compilerOptions": {
                "lib": ["esnext"],
                "module": "node16",
                "moduleResolution": "node16"
            }
        }),
    }
}

/// Manifest of a new app or package.
pub fn member_package_json(name: &str) -> Value {
    json!({
        "name": name,
        "version": "0.0.0",
        "private": true,
        "scripts": {
            "build": "echo build",
            "dev": "echo dev"
        }
    })
}

/// `tsconfig.json` of a new app or package, extending the flavor preset.
pub fn member_tsconfig(flavor: Flavor) -> Value {
    json!({
        "extends": format!("../../{CONFIG_TS_DIR}/{}", flavor.preset_file()),
        "compilerOptions": {
            "outDir": "dist",
            "rootDir": "src"
        },
        "include": ["src"],
        "exclude": ["node_modules", "dist"]
    })
}
