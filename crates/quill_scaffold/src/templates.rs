//! The fixed project-file table
//!
//! Every scaffold run writes exactly this set of (relative path, content)
//! pairs. The only substitution is the toolkit source root interpolated into
//! the native-build descriptors; all other content is byte-fixed, so repeated
//! runs produce identical trees.

use std::path::Path;

use crate::icons::IC_LAUNCHER_PNG;

/// File contents: literal text or an embedded binary blob
#[derive(Debug)]
pub enum Contents {
    Text(String),
    Binary(&'static [u8]),
}

impl Contents {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Contents::Text(text) => text.as_bytes(),
            Contents::Binary(bytes) => bytes,
        }
    }
}

/// One entry of the project tree
#[derive(Debug)]
pub struct TemplateFile {
    /// Path relative to the project root
    pub path: &'static str,
    pub contents: Contents,
}

fn text(path: &'static str, body: &str) -> TemplateFile {
    TemplateFile {
        path,
        contents: Contents::Text(body.to_string()),
    }
}

fn binary(path: &'static str, bytes: &'static [u8]) -> TemplateFile {
    TemplateFile {
        path,
        contents: Contents::Binary(bytes),
    }
}

/// Relative paths of every file a scaffold run writes, in write order
pub fn template_paths() -> Vec<&'static str> {
    project_files(Path::new("/")).iter().map(|t| t.path).collect()
}

/// Build the full template table for a toolkit rooted at `toolkit_root`.
pub fn project_files(toolkit_root: &Path) -> Vec<TemplateFile> {
    let root = toolkit_root.display().to_string();
    vec![
        // project-level files
        text("Quill/abi-version.h", "/* #undef QUILL_ABI_VERSION */\n"),
        text(
            "build.gradle",
            "buildscript {\n\
             \x20   repositories {\n\
             \x20       google()\n\
             \x20       mavenCentral()\n\
             \x20   }\n\
             \x20   dependencies {\n\
             \x20       classpath 'com.android.tools.build:gradle:8.1.0'\n\
             \x20   }\n\
             }\n\
             \n\
             allprojects {\n\
             \x20   repositories {\n\
             \x20       google()\n\
             \x20       mavenCentral()\n\
             \x20   }\n\
             }\n",
        ),
        // one include line per library and per application
        text("settings.gradle", "include ':quill'\ninclude ':hello'\n"),
        text(
            "config.h",
            "#define QUILL_DATADIR \"/usr/local/share/quill\"\n\
             #define QUILL_DOCDIR \"/usr/local/share/doc/quill\"\n\
             #define QUILL_BORDER_WIDTH 2\n\
             #define QUILL_HAVE_GL 0\n\
             #define QUILL_USE_COLORMAP 1\n\
             #define QUILL_HAVE_PTHREAD 1\n\
             #define QUILL_HAVE_PTHREAD_H 1\n\
             #define QUILL_HAVE_LIBPNG 1\n\
             #define QUILL_HAVE_LIBZ 1\n\
             #define QUILL_HAVE_LIBJPEG 1\n\
             #define QUILL_HAVE_DLFCN_H 1\n\
             #define QUILL_HAVE_DLSYM 1\n\
             #define QUILL_HAVE_LONG_LONG 1\n\
             #define QUILL_NO_PRINT_SUPPORT 1\n\
             /* #undef QUILL_USE_X11 */\n\
             /* #undef QUILL_USE_WAYLAND */\n",
        ),
        // per-library subtree
        text(
            "quill/build.gradle",
            "apply plugin: 'com.android.library'\n\
             \n\
             android {\n\
             \x20 namespace 'org.quill.quill'\n\
             \x20 compileSdkVersion 34\n\
             \x20 defaultConfig {\n\
             \x20   minSdkVersion 24\n\
             \x20   targetSdkVersion 34\n\
             \x20   externalNativeBuild {\n\
             \x20     cmake {\n\
             \x20       arguments '-DANDROID_STL=c++_shared'\n\
             \x20       targets 'quill'\n\
             \x20     }\n\
             \x20   }\n\
             \x20 }\n\
             \x20 buildTypes {\n\
             \x20   release {\n\
             \x20     minifyEnabled false\n\
             \x20   }\n\
             \x20 }\n\
             \x20 externalNativeBuild {\n\
             \x20   cmake {\n\
             \x20     path 'src/main/cpp/CMakeLists.txt'\n\
             \x20   }\n\
             \x20 }\n\
             }\n",
        ),
        text(
            "quill/src/main/AndroidManifest.xml",
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <manifest xmlns:android=\"http://schemas.android.com/apk/res/android\"\n\
             \x20         package=\"org.quill.quill\">\n\
             </manifest>\n",
        ),
        TemplateFile {
            path: "quill/src/main/cpp/CMakeLists.txt",
            contents: Contents::Text(library_cmake(&root)),
        },
        // per-application subtree
        text(
            "hello/build.gradle",
            "apply plugin: 'com.android.application'\n\
             android {\n\
             \x20   namespace 'org.quill.hello'\n\
             \x20   compileSdkVersion 34\n\
             \x20   dependencies {\n\
             \x20       implementation project(':quill')\n\
             \x20   }\n\
             \x20   defaultConfig {\n\
             \x20       applicationId 'org.quill.hello'\n\
             \x20       minSdkVersion 24\n\
             \x20       targetSdkVersion 34\n\
             \x20       externalNativeBuild {\n\
             \x20           cmake {\n\
             \x20               arguments '-DANDROID_STL=c++_shared'\n\
             \x20           }\n\
             \x20       }\n\
             \x20   }\n\
             \x20   buildTypes {\n\
             \x20       release {\n\
             \x20           minifyEnabled false\n\
             \x20       }\n\
             \x20   }\n\
             \x20   externalNativeBuild {\n\
             \x20       cmake {\n\
             \x20           path 'src/main/cpp/CMakeLists.txt'\n\
             \x20       }\n\
             \x20   }\n\
             }\n",
        ),
        text(
            "hello/src/main/AndroidManifest.xml",
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <manifest xmlns:android=\"http://schemas.android.com/apk/res/android\"\n\
             \x20         package=\"org.quill.hello\"\n\
             \x20         android:versionCode=\"1\"\n\
             \x20         android:versionName=\"1.0\">\n\
             \x20 <application\n\
             \x20     android:allowBackup=\"false\"\n\
             \x20     android:fullBackupContent=\"false\"\n\
             \x20     android:icon=\"@mipmap/ic_launcher\"\n\
             \x20     android:label=\"@string/app_name\"\n\
             \x20     android:hasCode=\"false\">\n\
             \x20   <activity android:name=\"android.app.NativeActivity\"\n\
             \x20             android:exported=\"true\"\n\
             \x20             android:label=\"@string/app_name\">\n\
             \x20     <meta-data android:name=\"android.app.lib_name\"\n\
             \x20                android:value=\"hello\" />\n\
             \x20     <intent-filter>\n\
             \x20       <action android:name=\"android.intent.action.MAIN\" />\n\
             \x20       <category android:name=\"android.intent.category.LAUNCHER\" />\n\
             \x20     </intent-filter>\n\
             \x20   </activity>\n\
             \x20 </application>\n\
             </manifest>\n",
        ),
        TemplateFile {
            path: "hello/src/main/cpp/CMakeLists.txt",
            contents: Contents::Text(app_cmake(&root)),
        },
        binary("hello/src/main/res/mipmap-mdpi/ic_launcher.png", IC_LAUNCHER_PNG),
        binary("hello/src/main/res/mipmap-hdpi/ic_launcher.png", IC_LAUNCHER_PNG),
        binary("hello/src/main/res/mipmap-xhdpi/ic_launcher.png", IC_LAUNCHER_PNG),
        binary("hello/src/main/res/mipmap-xxhdpi/ic_launcher.png", IC_LAUNCHER_PNG),
        text(
            "hello/src/main/res/values/strings.xml",
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <resources>\n\
             \x20   <string name=\"app_name\">hello</string>\n\
             </resources>\n",
        ),
    ]
}

/// Native-build descriptor for the toolkit static library
fn library_cmake(toolkit_root: &str) -> String {
    format!(
        "cmake_minimum_required(VERSION 3.22)\n\
         \n\
         set(QUILL_DIR \"{toolkit_root}\")\n\
         set(QUILL_IDE_DIR \"../../../..\")\n\
         set(CMAKE_CXX_FLAGS \"${{CMAKE_CXX_FLAGS}} -std=c++17\")\n\
         \n\
         set(QUILL_SOURCES\n\
         \x20 qu_core.cxx\n\
         \x20 qu_widget.cxx\n\
         \x20 qu_window.cxx\n\
         \x20 qu_group.cxx\n\
         \x20 qu_box.cxx\n\
         \x20 qu_button.cxx\n\
         \x20 qu_input.cxx\n\
         \x20 qu_menu.cxx\n\
         \x20 qu_scroll.cxx\n\
         \x20 qu_draw.cxx\n\
         \x20 qu_color.cxx\n\
         \x20 qu_font.cxx\n\
         \x20 qu_symbols.cxx\n\
         \x20 qu_utf8.cxx\n\
         \x20 qu_filename.cxx\n\
         \x20 qu_preferences.cxx\n\
         )\n\
         \n\
         set(QUILL_DRIVER_SOURCES\n\
         \x20 drivers/android/qu_android_application.cxx\n\
         \x20 drivers/android/qu_android_system_driver.cxx\n\
         \x20 drivers/android/qu_android_screen_driver.cxx\n\
         \x20 drivers/android/qu_android_window_driver.cxx\n\
         \x20 drivers/android/qu_android_graphics_driver.cxx\n\
         \x20 drivers/android/qu_android_graphics_font.cxx\n\
         )\n\
         \n\
         list(TRANSFORM QUILL_SOURCES PREPEND \"${{QUILL_DIR}}/src/\")\n\
         list(TRANSFORM QUILL_DRIVER_SOURCES PREPEND \"${{QUILL_DIR}}/src/\")\n\
         \n\
         add_library(quill STATIC\n\
         \x20 ${{QUILL_SOURCES}}\n\
         \x20 ${{QUILL_DRIVER_SOURCES}}\n\
         )\n\
         \n\
         set_target_properties(quill\n\
         \x20   PROPERTIES\n\
         \x20   CLEAN_DIRECT_OUTPUT TRUE\n\
         \x20   COMPILE_DEFINITIONS \"QUILL_LIBRARY\"\n\
         )\n\
         \n\
         target_include_directories(\n\
         \x20   quill SYSTEM PRIVATE\n\
         \x20   ${{QUILL_DIR}}/\n\
         \x20   ${{QUILL_DIR}}/src/\n\
         \x20   ${{QUILL_IDE_DIR}}/\n\
         )\n"
    )
}

/// Native-build descriptor for the demo application
fn app_cmake(toolkit_root: &str) -> String {
    format!(
        "cmake_minimum_required(VERSION 3.22)\n\
         set(QUILL_DIR \"{toolkit_root}\")\n\
         set(QUILL_IDE_DIR \"../../../..\")\n\
         set(CMAKE_CXX_FLAGS \"${{CMAKE_CXX_FLAGS}} -std=c++17\")\n\
         add_library(\n\
         \x20   hello SHARED\n\
         \x20   \"${{QUILL_DIR}}/demos/hello.cxx\"\n\
         )\n\
         target_include_directories(\n\
         \x20   hello SYSTEM PRIVATE\n\
         \x20   ${{QUILL_DIR}}/\n\
         \x20   ${{QUILL_IDE_DIR}}/\n\
         )\n\
         target_link_libraries(\n\
         \x20   hello\n\
         \x20   \"${{QUILL_DIR}}/build/AndroidStudio/quill/.cxx/cmake/${{CMAKE_BUILD_TYPE}}/${{ANDROID_ABI}}/libquill.a\"\n\
         \x20   android\n\
         \x20   log\n\
         \x20   m\n\
         )\n"
    )
}
